// Pipeline orchestration: drives the crawl-and-rank run.

pub mod crawl;
