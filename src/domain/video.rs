//! Player showcase videos.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::ALLOWED_VIDEO_EXTENSIONS;

/// Stored value of `tipo` for uploaded files.
pub const VIDEO_TYPE_LOCAL: &str = "local";
/// Stored value of `tipo` for YouTube links.
pub const VIDEO_TYPE_YOUTUBE: &str = "youtube";

/// Where a video lives. Exactly one locator exists per kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "tipo", rename_all = "lowercase")]
pub enum VideoSource {
    /// File in the upload directory, served from `/uploads/<filename>`
    Local { filename: String },
    Youtube { url: String },
}

impl VideoSource {
    pub fn kind(&self) -> &'static str {
        match self {
            VideoSource::Local { .. } => VIDEO_TYPE_LOCAL,
            VideoSource::Youtube { .. } => VIDEO_TYPE_YOUTUBE,
        }
    }

    /// Rebuild from the stored (tipo, url, filename) columns.
    pub fn from_columns(
        tipo: &str,
        url: Option<String>,
        filename: Option<String>,
    ) -> Option<Self> {
        match tipo {
            VIDEO_TYPE_LOCAL => filename.map(|filename| VideoSource::Local { filename }),
            VIDEO_TYPE_YOUTUBE => url.map(|url| VideoSource::Youtube { url }),
            _ => None,
        }
    }
}

/// Video entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Video {
    pub id: Uuid,
    pub player_id: Uuid,
    pub titulo: String,
    pub descripcion: Option<String>,
    #[serde(flatten)]
    pub source: VideoSource,
    pub uploaded_at: DateTime<Utc>,
}

/// Data for a new video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub titulo: String,
    pub descripcion: Option<String>,
    pub source: VideoSource,
}

/// True when the filename carries one of the accepted video extensions.
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_VIDEO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Reduce a client supplied filename to a safe single path component.
///
/// Path separators and whitespace become `_`, anything outside
/// `[A-Za-z0-9._-]` is dropped, and leading dots or underscores are
/// stripped so the result can never be hidden or walk out of the
/// upload directory. May return an empty string.
pub fn secure_filename(filename: &str) -> String {
    let replaced: String = filename
        .chars()
        .map(|c| match c {
            '/' | '\\' => ' ',
            c => c,
        })
        .collect();

    let joined = replaced.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        assert!(allowed_file("goles.mp4"));
        assert!(allowed_file("final.MOV"));
        assert!(allowed_file("a.b.webm"));
        assert!(allowed_file("clip.mkv"));
        assert!(!allowed_file("malware.exe"));
        assert!(!allowed_file("notes.txt"));
        assert!(!allowed_file("mp4"));
        assert!(!allowed_file(""));
    }

    #[test]
    fn test_secure_filename_strips_paths() {
        assert_eq!(secure_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(secure_filename("C:\\videos\\gol.mp4"), "C_videos_gol.mp4");
    }

    #[test]
    fn test_secure_filename_whitespace_and_symbols() {
        assert_eq!(secure_filename("mi gol  final.mp4"), "mi_gol_final.mp4");
        assert_eq!(secure_filename("partido#1!.mov"), "partido1.mov");
        assert_eq!(secure_filename(".hidden.mp4"), "hidden.mp4");
    }

    #[test]
    fn test_secure_filename_can_be_empty() {
        assert_eq!(secure_filename("ñññ"), "");
        assert_eq!(secure_filename("..."), "");
    }

    #[test]
    fn test_source_from_columns() {
        assert_eq!(
            VideoSource::from_columns("youtube", Some("https://youtu.be/x".into()), None),
            Some(VideoSource::Youtube {
                url: "https://youtu.be/x".into()
            })
        );
        assert_eq!(
            VideoSource::from_columns("local", None, Some("gol.mp4".into())),
            Some(VideoSource::Local {
                filename: "gol.mp4".into()
            })
        );
        assert_eq!(VideoSource::from_columns("local", Some("x".into()), None), None);
        assert_eq!(VideoSource::from_columns("vimeo", None, None), None);
    }
}
