pub mod api;
pub mod auth;
pub mod curriculum;
pub mod facilities;
pub mod finance;
pub mod marketing;
pub mod quality;
pub mod staff;
pub mod students;

pub use api::{ApiClient, ApiError};
pub use auth::AuthService;
pub use curriculum::CurriculumService;
pub use facilities::FacilityService;
pub use finance::FinanceService;
pub use marketing::MarketingService;
pub use quality::QualityService;
pub use staff::StaffService;
pub use students::StudentService;
