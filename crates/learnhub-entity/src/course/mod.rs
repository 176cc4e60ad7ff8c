//! Course aggregate: the course record, its content sections, and the
//! question / review threads hanging off them.

pub mod model;
pub mod thread;
pub mod view;

pub use model::{Course, CourseItem, CourseLink, CourseSection};
pub use thread::{CourseQuestion, CourseReview, QuestionAnswer, ReviewReply};
pub use view::{CourseDetail, CoursePublic, QuestionThread, ReviewThread, SectionContent, SectionPreview};
