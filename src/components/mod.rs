pub mod app;
pub mod assessment_list;
pub mod campaign_list;
pub mod classroom_list;
pub mod course_list;
pub mod dashboard;
pub mod fee_list;
pub mod feedback_list;
pub mod guard;
pub mod improvement_list;
pub mod lead_list;
pub mod lesson_list;
pub mod login;
pub mod material_list;
pub mod nav;
pub mod pagination;
pub mod password_reset;
pub mod payment_list;
pub mod profile;
pub mod register;
pub mod resource_list;
pub mod staff_list;
pub mod student_list;

pub use app::App;
