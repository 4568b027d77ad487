//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate, so service and
//! controller signatures don't need to spell out the full entity paths.

/// Type alias for the employee database model.
///
/// # Fields (from `entity::employee::Model`)
/// - `id` - Primary key used in API routes
/// - `employee_number` - Sequential number behind the `EMPnnn` code (unique)
/// - `name` - Employee name
/// - `position` - Job title (nullable)
/// - `department` - Department name (nullable)
/// - `salary` - Salary amount (nullable)
/// - `status` - `Active` or `Inactive`
/// - `joining_date` - Date the employee joined
pub type EmployeeModel = entity::employee::Model;

/// Type alias for the job applicant database model.
///
/// # Fields (from `entity::applicant::Model`)
/// - `id` - Primary key used in API routes
/// - `name`, `email`, `phone` - Contact details, empty when not provided
/// - `position` - Position applied for
/// - `resume_url` - Link to the resume, empty when not provided
/// - `created_at` - Timestamp when the application was recorded
/// - `updated_at` - Timestamp of the last change
pub type ApplicantModel = entity::applicant::Model;

/// Type alias for the invoice database model.
///
/// # Fields (from `entity::invoice::Model`)
/// - `id` - Primary key used in API routes
/// - `employee` - Free-text employee reference, not a foreign key
/// - `amount` - Invoice amount
/// - `issue_date` - Date the invoice was issued
/// - `due_date` - Date payment is due
/// - `status` - `Paid`, `Pending`, or `Overdue`
pub type InvoiceModel = entity::invoice::Model;
