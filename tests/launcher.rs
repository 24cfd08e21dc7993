use std::fs;
use std::path::Path;

use pass_launcher::{KeywordQuery, Launcher, Preferences};
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

fn launcher(dir: &TempDir, max_results: &str) -> Launcher {
    Launcher::new(Preferences {
        pass_location: dir.path().display().to_string(),
        max_results: max_results.to_owned(),
        notify: false,
        ..Preferences::default()
    })
}

#[test]
fn search_keyword_returns_copy_actions() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "email/gmail.gpg");
    touch(dir.path(), "bank/chase.gpg");

    let items = launcher(&dir, "5").on_keyword_query(&"p gmail".parse().unwrap());

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "email/gmail");
    assert_eq!(items[0].on_enter.to_shell(), "pass -c email/gmail");
}

#[test]
fn search_results_stop_at_max_results() {
    let dir = TempDir::new().unwrap();
    for i in 0..12 {
        touch(dir.path(), &format!("sites/site{}.gpg", i));
    }

    let launcher = launcher(&dir, "4");

    assert_eq!(launcher.on_keyword_query(&"p site".parse().unwrap()).len(), 4);
    assert_eq!(launcher.on_keyword_query(&"p".parse().unwrap()).len(), 4);
}

#[test]
fn unreadable_limit_falls_back_to_five() {
    let dir = TempDir::new().unwrap();
    for i in 0..8 {
        touch(dir.path(), &format!("e{}.gpg", i));
    }

    let items = launcher(&dir, "ten").on_keyword_query(&KeywordQuery::new("p", None));

    assert_eq!(items.len(), 5);
}

#[test]
fn missing_store_shows_no_results() {
    let dir = TempDir::new().unwrap();
    let launcher = Launcher::new(Preferences {
        pass_location: dir.path().join("absent").display().to_string(),
        ..Preferences::default()
    });

    assert!(launcher
        .on_keyword_query(&"p anything".parse().unwrap())
        .is_empty());
}

#[test]
fn generate_keyword_names_the_argument() {
    let dir = TempDir::new().unwrap();
    let launcher = launcher(&dir, "5");

    assert!(launcher.on_keyword_query(&"pg".parse().unwrap()).is_empty());

    let items = launcher.on_keyword_query(&"pg example.com".parse().unwrap());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].on_enter.to_shell(), "pass generate -c example.com");
}
