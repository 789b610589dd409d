//! Application state for the TUI.
//!
//! [`App`] bundles the core [`SessionState`] with the controller and the
//! loaded configuration. Transitions consume `self` and return a new `App`.

use std::path::{Path, PathBuf};

use hito_core::config::{config_path, keymap_path, theme_path};
use hito_core::{
    Action, ActionRegistry, Command, Config, Controller, CoreError, FsLister, FsPreviewer, Keymap,
    SessionState, Theme,
};

/// Actions listed in the help line, in display order.
const HELP_ACTIONS: &[Action] = &[
    Action::CursorDown,
    Action::CursorUp,
    Action::Enter,
    Action::GoParent,
    Action::ToggleHidden,
    Action::Copy,
    Action::Cut,
    Action::Delete,
    Action::Rename,
    Action::NewDirectory,
    Action::Quit,
];

/// Startup parameters resolved from the command line.
#[derive(Debug, Clone)]
pub struct StartOptions {
    pub path: Option<PathBuf>,
    pub show_hidden: bool,
    pub config_dir: PathBuf,
    pub viewport_height: usize,
}

/// Top-level application state.
#[derive(Debug)]
pub struct App {
    session: SessionState,
    controller: Controller<FsLister, FsPreviewer>,
    keymap: Keymap,
    registry: ActionRegistry,
    theme: Theme,
    config: Config,
}

impl App {
    /// Loads configuration from `options.config_dir` and opens the start directory.
    pub fn new(options: &StartOptions) -> Self {
        let dir = &options.config_dir;
        let config = Config::load_or_default(&config_path(dir));
        let theme = Theme::load_or_default(&theme_path(dir));
        let keymap = Keymap::load_or_default(&keymap_path(dir));
        tracing::debug!("configuration loaded from {}", dir.display());

        Self::from_parts(options, config, theme, keymap)
    }

    /// Builds an app from already-loaded configuration.
    pub fn from_parts(options: &StartOptions, config: Config, theme: Theme, keymap: Keymap) -> Self {
        let controller = Controller::new(FsLister, FsPreviewer::new(config.preview.limits()))
            .with_parent_entry(config.general.show_parent_entry);
        let show_hidden = options.show_hidden || config.general.show_hidden;

        let (start_dir, rejected) = start_dir(options.path.as_deref());
        let session = controller.start(&start_dir, show_hidden, options.viewport_height);
        let session = match rejected {
            Some(err) => {
                tracing::warn!("ignoring start path: {err}");
                session.with_status(format!("Error: {err}"))
            }
            None => session,
        };

        Self {
            session,
            controller,
            keymap,
            registry: ActionRegistry::new(),
            theme,
            config,
        }
    }

    /// Applies a command to the session.
    pub fn dispatch(self, command: Command) -> Self {
        let session = self.controller.dispatch(self.session, command);
        Self { session, ..self }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.session.should_quit()
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Key hints built from the current keymap, e.g. `"j:down k:up"`.
    pub fn help_text(&self) -> String {
        HELP_ACTIONS
            .iter()
            .filter_map(|&action| {
                let key = self.keymap.primary_key(action)?;
                let name = self.registry.descriptor_for(action)?.name;
                Some(format!("{key}:{name}"))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Picks the directory to open.
///
/// Falls back to the current directory, returning why `requested` was
/// rejected.
fn start_dir(requested: Option<&Path>) -> (PathBuf, Option<CoreError>) {
    let current = || std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let Some(path) = requested else {
        return (current(), None);
    };
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => (path.to_path_buf(), None),
        Ok(_) => (current(), Some(CoreError::NotADirectory(path.to_path_buf()))),
        Err(e) => (current(), Some(CoreError::from_io(e, path))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn options(path: &Path) -> StartOptions {
        StartOptions {
            path: Some(path.to_path_buf()),
            show_hidden: false,
            config_dir: path.join("no-config"),
            viewport_height: 10,
        }
    }

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), "b").unwrap();
        fs::write(tmp.path().join(".hidden"), "").unwrap();
        fs::create_dir(tmp.path().join("A")).unwrap();
        tmp
    }

    #[test]
    fn new_opens_requested_directory() {
        let tmp = fixture();
        let app = App::new(&options(tmp.path()));
        assert_eq!(app.session().cwd(), tmp.path().canonicalize().unwrap());
        assert!(app.session().status().is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn hidden_flag_from_options() {
        let tmp = fixture();
        let opts = StartOptions {
            show_hidden: true,
            ..options(tmp.path())
        };
        let app = App::new(&opts);
        assert!(app.session().show_hidden());
        let names: Vec<&str> = app
            .session()
            .listing()
            .entries()
            .iter()
            .map(|e| e.name())
            .collect();
        assert!(names.contains(&".hidden"));
    }

    #[test]
    fn config_files_are_read_from_config_dir() {
        let tmp = fixture();
        let cfg = tmp.path().join("cfg");
        fs::create_dir(&cfg).unwrap();
        fs::write(
            cfg.join("config.toml"),
            "[general]\nshow_hidden = true\nshow_parent_entry = false\n",
        )
        .unwrap();
        fs::write(cfg.join("keymap.toml"), "[bindings]\nw = \"quit\"\n").unwrap();
        fs::write(cfg.join("theme.toml"), "[panel]\ndir_fg = \"red\"\n").unwrap();

        let opts = StartOptions {
            config_dir: cfg,
            ..options(tmp.path())
        };
        let app = App::new(&opts);
        assert!(app.session().show_hidden());
        assert!(!app.session().listing().has_parent());
        assert_eq!(app.keymap().action_for_key("w"), Some(Action::Quit));
        assert_eq!(app.theme().panel.dir_fg, "red");
        assert!(!app.config().general.show_parent_entry);
    }

    #[test]
    fn file_argument_falls_back_to_current_dir() {
        let tmp = fixture();
        let file = tmp.path().join("b.txt");
        let app = App::new(&options(&file));

        let cwd = std::env::current_dir().unwrap().canonicalize().unwrap();
        assert_eq!(app.session().cwd(), cwd);
        let status = app.session().status().unwrap();
        assert!(status.starts_with("Error: not a directory: "));
    }

    #[test]
    fn missing_start_path_reports_not_found() {
        let tmp = fixture();
        let missing = tmp.path().join("nowhere");
        let app = App::new(&options(&missing));

        let cwd = std::env::current_dir().unwrap().canonicalize().unwrap();
        assert_eq!(app.session().cwd(), cwd);
        let expected = format!("Error: path not found: {}", missing.display());
        assert_eq!(app.session().status(), Some(expected.as_str()));
    }

    #[test]
    fn dispatch_updates_session() {
        let tmp = fixture();
        let app = App::new(&options(tmp.path()));
        let app = app.dispatch(Command::CursorDown);
        assert_eq!(app.session().selected().unwrap().name(), "A");
        let app = app.dispatch(Command::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn help_text_follows_keymap() {
        let tmp = fixture();
        let app = App::new(&options(tmp.path()));
        let help = app.help_text();
        assert!(help.starts_with("j:down k:up l:open h:back .:hidden"));
        assert!(help.ends_with("q:quit"));
    }
}
