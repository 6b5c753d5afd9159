// LyricScore CLI Entry Point
// Reads lyrics from a file (or stdin) and prints the metrics bundle as JSON.

use anyhow::{Context, Result};
use lyricscore_core::{telemetry, EngineConfig, LyricAnalyzer};
use std::io::Read;
use std::{env, fs, io};
use tracing::{error, info};

fn read_lyrics(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading lyrics from {}", path);
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
        None => {
            info!("Reading lyrics from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    telemetry::init_tracing("lyricscore", "info")?;

    let config = EngineConfig::from_env()?;
    let analyzer = LyricAnalyzer::from_config(&config).context("Failed to initialize lexicon")?;

    let path = env::args().nth(1);
    let text = read_lyrics(path.as_deref())?;

    let bundle = analyzer.analyze(&text).map_err(|e| {
        error!("Analysis rejected: {}", e);
        e
    })?;

    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_lyrics_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Sun and fun,\nUnder the sun").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let text = read_lyrics(Some(&path)).unwrap();
        assert_eq!(text, "Sun and fun,\nUnder the sun");
    }

    #[test]
    fn test_read_lyrics_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let path = path.to_string_lossy().to_string();

        let err = read_lyrics(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
