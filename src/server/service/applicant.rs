use sea_orm::DatabaseConnection;

use crate::{
    model::applicant::{ApplicantDto, CreateApplicantDto, UpdateApplicantDto},
    server::{
        data::applicant::ApplicantRepository,
        error::{record::RecordError, Error},
    },
};

/// Service for job applicants tracked on the hiring page.
///
/// Applicant fields are free text and may be left empty, so no validation is applied
/// beyond trimming surrounding whitespace.
pub struct ApplicantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, applicant: CreateApplicantDto) -> Result<ApplicantDto, Error> {
        let applicant = CreateApplicantDto {
            name: applicant.name.trim().to_string(),
            email: applicant.email.trim().to_string(),
            phone: applicant.phone.trim().to_string(),
            position: applicant.position.trim().to_string(),
            resume_url: applicant.resume_url.trim().to_string(),
        };

        let model = ApplicantRepository::new(self.db).create(applicant).await?;

        Ok(model.into())
    }

    /// Lists every applicant, newest first.
    pub async fn get_all(&self) -> Result<Vec<ApplicantDto>, Error> {
        let applicants = ApplicantRepository::new(self.db).get_all().await?;

        Ok(applicants.into_iter().map(ApplicantDto::from).collect())
    }

    /// Case-insensitive search over applicant names and emails.
    ///
    /// A missing or blank query returns every applicant.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<ApplicantDto>, Error> {
        let applicants = ApplicantRepository::new(self.db)
            .search(query.unwrap_or_default())
            .await?;

        Ok(applicants.into_iter().map(ApplicantDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ApplicantDto, Error> {
        ApplicantRepository::new(self.db)
            .get_by_id(id)
            .await?
            .map(ApplicantDto::from)
            .ok_or_else(|| RecordError::ApplicantNotFound(id).into())
    }

    pub async fn update(&self, id: i32, changes: UpdateApplicantDto) -> Result<ApplicantDto, Error> {
        let trim = |value: Option<String>| value.map(|v| v.trim().to_string());
        let changes = UpdateApplicantDto {
            name: trim(changes.name),
            email: trim(changes.email),
            phone: trim(changes.phone),
            position: trim(changes.position),
            resume_url: trim(changes.resume_url),
        };

        ApplicantRepository::new(self.db)
            .update(id, changes)
            .await?
            .map(ApplicantDto::from)
            .ok_or_else(|| RecordError::ApplicantNotFound(id).into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = ApplicantRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(RecordError::ApplicantNotFound(id).into());
        }

        Ok(())
    }
}
