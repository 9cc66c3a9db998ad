//! Domain models and request payloads
//!
//! Records map one-to-one onto table rows. Request payloads are lenient at
//! the transport boundary; the store enforces what must be present.

pub mod category;
pub mod lenient;
pub mod pagination;
pub mod question;
pub mod quiz;

pub use category::{category_map, Category, CategoryMap};
pub use pagination::{Pagination, PaginationParams, QUESTIONS_PER_PAGE};
pub use question::{NewQuestion, Question, SearchRequest};
pub use quiz::{QuizCategory, QuizRequest};
