pub mod corpus;
pub mod matcher;
pub mod mode;
pub mod romaji;
pub mod settings;
pub mod unicode;
