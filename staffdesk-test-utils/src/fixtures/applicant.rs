use chrono::NaiveDateTime;
use sea_orm::EntityTrait;

use crate::{error::TestError, fixtures::factory, model::ApplicantModel, TestContext};

impl TestContext {
    /// Access applicant fixture methods.
    pub fn applicant<'a>(&'a self) -> ApplicantFixtures<'a> {
        ApplicantFixtures { setup: self }
    }
}

pub struct ApplicantFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ApplicantFixtures<'a> {
    /// Insert an applicant created now.
    pub async fn insert_applicant(
        &self,
        name: &str,
        email: &str,
    ) -> Result<ApplicantModel, TestError> {
        self.insert_applicant_at(name, email, factory::now()).await
    }

    /// Insert an applicant with a fixed creation time.
    ///
    /// Useful for asserting newest-first ordering without sleeping between inserts.
    ///
    /// # Arguments
    /// - `name` - Applicant name
    /// - `email` - Applicant email
    /// - `created_at` - Value for both `created_at` and `updated_at`
    ///
    /// # Returns
    /// - `Ok(ApplicantModel)` - The created applicant record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_applicant_at(
        &self,
        name: &str,
        email: &str,
        created_at: NaiveDateTime,
    ) -> Result<ApplicantModel, TestError> {
        Ok(
            entity::prelude::Applicant::insert(factory::mock_applicant(name, email, created_at))
                .exec_with_returning(&self.setup.db)
                .await?,
        )
    }
}
