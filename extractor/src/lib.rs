use middleware::extractor::ExtractionMiddleware;

pub mod caller;
pub mod middleware {
    pub mod extractor;
}

pub use caller::CurrentCaller;

pub fn middleware() -> ExtractionMiddleware {
    ExtractionMiddleware::new()
}
