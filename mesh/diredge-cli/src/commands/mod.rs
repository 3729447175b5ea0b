//! Subcommand implementations.

pub mod build;
pub mod check;
pub mod index;
pub mod repair;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use diredge_topology::TwinMatching;

/// `--twin-matching` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TwinMatchingArg {
    /// Pairwise scan, O(n²)
    Scan,
    /// Hash lookup, O(n)
    #[default]
    Indexed,
}

impl From<TwinMatchingArg> for TwinMatching {
    fn from(arg: TwinMatchingArg) -> Self {
        match arg {
            TwinMatchingArg::Scan => Self::Scan,
            TwinMatchingArg::Indexed => Self::Indexed,
        }
    }
}

/// `output` if given, otherwise `input` with its stem suffixed and its
/// extension replaced.
pub fn output_path(input: &Path, output: Option<&Path>, suffix: &str, extension: &str) -> PathBuf {
    if let Some(path) = output {
        return path.to_path_buf();
    }
    let stem = diredge_io::object_name(input);
    input.with_file_name(format!("{stem}{suffix}.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_output_paths() {
        assert_eq!(
            output_path(Path::new("data/bunny.tri"), None, "", "face"),
            PathBuf::from("data/bunny.face")
        );
        assert_eq!(
            output_path(Path::new("data/box.diredge"), None, "_fixed", "diredge"),
            PathBuf::from("data/box_fixed.diredge")
        );
        assert_eq!(
            output_path(Path::new("a.tri"), Some(Path::new("b.face")), "", "face"),
            PathBuf::from("b.face")
        );
    }
}
