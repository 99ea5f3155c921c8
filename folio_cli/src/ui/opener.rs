use folio_core::utils::debug::debug_print_module;
use folio_core::{FolioError, UrlOpener};

/// Hands URLs to the platform's default handler
pub struct SystemOpener;

/// Program and arguments that open `url` on this platform
pub fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "windows") {
        ("cmd", vec!["/C".into(), "start".into(), String::new(), url.into()])
    } else if cfg!(target_os = "macos") {
        ("open", vec![url.into()])
    } else {
        ("xdg-open", vec![url.into()])
    }
}

impl UrlOpener for SystemOpener {
    fn open_in_new_context(&self, url: &str) -> Result<(), FolioError> {
        let (program, args) = opener_command(url);
        debug_print_module("OPEN", &format!("{} {:?}", program, args));

        duct::cmd(program, args)
            .stdout_null()
            .stderr_null()
            .start()
            .map(|_| ())
            .map_err(|e| FolioError::Launch {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_last_argument() {
        let (_, args) = opener_command("mailto:a@b.com?subject=Hi");
        assert_eq!(args.last().map(String::as_str), Some("mailto:a@b.com?subject=Hi"));
    }
}
