use anyhow::{Context, Result};
use git2::Repository;
use std::path::Path;

/// Result of refreshing the listing repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullOutcome {
    /// The listing file is not inside a git repository
    NotGitManaged,
    /// Local branch already matched origin
    UpToDate,
    /// Local branch was fast-forwarded to origin
    FastForwarded,
}

/// Git access used to refresh a listing file from its remote before loading
pub struct GitOps {
    repo: Option<Repository>,
}

impl GitOps {
    /// Create a new GitOps instance by detecting if the path is in a git repository
    pub fn new(file_path: &Path) -> Self {
        let file_dir = if file_path.is_file() {
            file_path.parent().unwrap_or(file_path).to_path_buf()
        } else {
            file_path.to_path_buf()
        };

        Self {
            repo: Repository::discover(&file_dir).ok(),
        }
    }

    /// Check if the file is under git version control
    pub fn is_git_managed(&self) -> bool {
        self.repo.is_some()
    }

    /// Fetch the current branch from `origin` and fast-forward to it
    ///
    /// Diverged histories are reported as an error and left untouched.
    pub fn pull(&self) -> Result<PullOutcome> {
        let Some(repo) = &self.repo else {
            return Ok(PullOutcome::NotGitManaged);
        };

        let head = repo.head().context("Failed to get HEAD")?;
        let branch_name = head
            .shorthand()
            .context("Failed to get branch name")?
            .to_string();

        let mut remote = repo
            .find_remote("origin")
            .context("Failed to find remote 'origin'")?;
        remote
            .fetch(&[&branch_name], None, None)
            .context("Failed to fetch from origin")?;

        let fetch_head = repo.find_reference("FETCH_HEAD")?;
        let fetch_commit = repo.reference_to_annotated_commit(&fetch_head)?;
        let (analysis, _) = repo.merge_analysis(&[&fetch_commit])?;

        if analysis.is_up_to_date() {
            return Ok(PullOutcome::UpToDate);
        }

        if analysis.is_fast_forward() {
            let refname = format!("refs/heads/{}", branch_name);
            let mut reference = repo.find_reference(&refname)?;
            reference.set_target(fetch_commit.id(), "Fast-forward")?;
            repo.set_head(&refname)?;
            repo.checkout_head(Some(git2::build::CheckoutBuilder::default().force()))?;
            return Ok(PullOutcome::FastForwarded);
        }

        Err(anyhow::anyhow!(
            "Listing repository has diverged from origin; resolve manually"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_non_git_directory() {
        let temp_dir = TempDir::new().unwrap();
        let git_ops = GitOps::new(&temp_dir.path().join("listing.toml"));
        assert!(!git_ops.is_git_managed());
        assert_eq!(git_ops.pull().unwrap(), PullOutcome::NotGitManaged);
    }
}
