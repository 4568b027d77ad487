use crate::{
    client::util::http::{delete_json, get_json, post_json},
    model::{
        api::MessageDto,
        applicant::{ApplicantDto, CreateApplicantDto},
    },
};

/// Retrieve applicants, filtered by `query` when it is not blank
pub async fn get_applicants(query: &str) -> Result<Vec<ApplicantDto>, String> {
    let query = query.trim();
    if query.is_empty() {
        return get_json("/api/hire/all").await;
    }

    get_json(&search_url(query)).await
}

fn search_url(query: &str) -> String {
    format!("/api/hire/search?query={}", urlencoding::encode(query))
}

pub async fn create_applicant(applicant: &CreateApplicantDto) -> Result<ApplicantDto, String> {
    post_json("/api/hire", applicant).await
}

pub async fn delete_applicant(id: i32) -> Result<MessageDto, String> {
    delete_json(&format!("/api/hire/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::search_url;

    #[test]
    fn search_url_encodes_reserved_characters() {
        assert_eq!(
            search_url("ada lovelace"),
            "/api/hire/search?query=ada%20lovelace"
        );
        assert_eq!(search_url("a&b=c%"), "/api/hire/search?query=a%26b%3Dc%25");
        assert_eq!(
            search_url("grace@navy.mil"),
            "/api/hire/search?query=grace%40navy.mil"
        );
    }
}
