pub mod compute;
pub mod corpus;
pub mod term;
pub mod tfidf;
pub mod tokenizer;
