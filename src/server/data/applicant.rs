use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, Condition, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, ExprTrait, IntoActiveModel, QueryFilter, QueryOrder, Select,
};

use crate::{
    model::applicant::{CreateApplicantDto, UpdateApplicantDto},
    server::model::db::ApplicantModel,
};

pub struct ApplicantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicantRepository<'a> {
    /// Creates a new instance of [`ApplicantRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, applicant: CreateApplicantDto) -> Result<ApplicantModel, DbErr> {
        let now = Utc::now().naive_utc();

        let applicant = entity::applicant::ActiveModel {
            name: ActiveValue::Set(applicant.name),
            email: ActiveValue::Set(applicant.email),
            phone: ActiveValue::Set(applicant.phone),
            position: ActiveValue::Set(applicant.position),
            resume_url: ActiveValue::Set(applicant.resume_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        applicant.insert(self.db).await
    }

    /// Gets all applicants, newest first
    pub async fn get_all(&self) -> Result<Vec<ApplicantModel>, DbErr> {
        Self::newest_first(entity::prelude::Applicant::find())
            .all(self.db)
            .await
    }

    /// Finds applicants whose name or email contains `query`, ignoring case
    ///
    /// The query is matched literally, `%` and `_` carry no wildcard meaning. A blank
    /// query matches every applicant.
    ///
    /// Stored values are folded with the database's `LOWER()`. PostgreSQL folds all
    /// Unicode letters, SQLite only folds ASCII, so on SQLite a non-ASCII capital such
    /// as `É` only matches a query using the same capital.
    pub async fn search(&self, query: &str) -> Result<Vec<ApplicantModel>, DbErr> {
        let query = query.trim();
        if query.is_empty() {
            return self.get_all().await;
        }

        let pattern = format!("%{}%", escape_like(&query.to_lowercase()));
        let name = Expr::expr(Func::lower(Expr::col(entity::applicant::Column::Name)));
        let email = Expr::expr(Func::lower(Expr::col(entity::applicant::Column::Email)));

        let condition = Condition::any()
            .add(name.like(LikeExpr::new(pattern.clone()).escape('\\')))
            .add(email.like(LikeExpr::new(pattern).escape('\\')));

        Self::newest_first(entity::prelude::Applicant::find().filter(condition))
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ApplicantModel>, DbErr> {
        entity::prelude::Applicant::find_by_id(id).one(self.db).await
    }

    /// Applies the fields present in `changes` and bumps `updated_at`
    ///
    /// Returns `None` if no applicant exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        changes: UpdateApplicantDto,
    ) -> Result<Option<ApplicantModel>, DbErr> {
        let Some(applicant) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut applicant = applicant.into_active_model();

        if let Some(name) = changes.name {
            applicant.name = ActiveValue::Set(name);
        }
        if let Some(email) = changes.email {
            applicant.email = ActiveValue::Set(email);
        }
        if let Some(phone) = changes.phone {
            applicant.phone = ActiveValue::Set(phone);
        }
        if let Some(position) = changes.position {
            applicant.position = ActiveValue::Set(position);
        }
        if let Some(resume_url) = changes.resume_url {
            applicant.resume_url = ActiveValue::Set(resume_url);
        }
        applicant.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        applicant.update(self.db).await.map(Some)
    }

    /// Deletes an applicant
    ///
    /// Check [`DeleteResult::rows_affected`] to learn whether the applicant existed.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Applicant::delete_by_id(id)
            .exec(self.db)
            .await
    }

    fn newest_first(
        query: Select<entity::prelude::Applicant>,
    ) -> Select<entity::prelude::Applicant> {
        query
            .order_by_desc(entity::applicant::Column::CreatedAt)
            .order_by_desc(entity::applicant::Column::Id)
    }
}

/// Escapes LIKE wildcards so the input is matched as a literal substring.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
