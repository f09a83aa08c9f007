use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// Watch a single file and ping `tx` on any change. The watcher thread
/// parks forever; dropping the channel receiver orphans it harmlessly.
pub(super) fn spawn_file_watcher(path: PathBuf, tx: Sender<()>) {
    std::thread::spawn(move || {
        use notify::{EventKind, RecursiveMode, Watcher};
        if let Ok(mut watcher) =
            notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                if let Ok(event) = res {
                    match event.kind {
                        EventKind::Modify(_)
                        | EventKind::Create(_)
                        | EventKind::Remove(_)
                        | EventKind::Any => {
                            let _ = tx.send(());
                        }
                        _ => {}
                    }
                }
            })
        {
            let _ = watcher.watch(path.as_path(), RecursiveMode::NonRecursive);
            loop {
                std::thread::sleep(std::time::Duration::from_secs(3600));
            }
        } else {
            log::warn!("could not start watcher for {}", path.display());
        }
    });
}
