pub mod auth;
pub mod curriculum;
pub mod facilities;
pub mod finance;
pub mod marketing;
pub mod page;
pub mod quality;
pub mod staff;
pub mod students;

pub use auth::{Credentials, LoginResponse, ProfileUpdate, RegisterRequest, Role, User};
pub use curriculum::{Course, CourseInput, CourseLevel, CourseMaterial, Lesson};
pub use facilities::{Classroom, Resource};
pub use finance::{FeeItem, Payment};
pub use marketing::{Campaign, Lead, LeadInput};
pub use page::ListEnvelope;
pub use quality::{Assessment, Feedback, ImprovementPlan};
pub use staff::StaffMember;
pub use students::{Student, StudentInput};
