/// Template acquisition infrastructure
///
/// The fetcher trait is the seam the bootstrap use case depends on; the git
/// implementation shells out to the `git` executable.

pub mod template_fetcher;
pub mod git_fetcher;

pub use template_fetcher::{classify_clone_failure, FetchError, TemplateFetcher};
pub use git_fetcher::GitFetcher;
