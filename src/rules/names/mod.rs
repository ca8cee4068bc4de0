pub mod gazetteer;
pub mod scoring;
