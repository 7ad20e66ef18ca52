// Internship matching: the listing catalog, the skill vocabulary extracted
// from it, and the weighted recommendation scorer.

pub mod catalog;
pub mod handlers;
pub mod scorer;
pub mod vocabulary;
