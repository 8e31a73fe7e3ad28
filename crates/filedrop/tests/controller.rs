use filedrop::{FileEvent, FileHandle, FileSetController, handle_drag_over};

fn picked(name: &str, mime_type: &str, size: u64) -> FileHandle {
    FileHandle::new(name, mime_type, size)
}

#[test]
fn pick_drop_remove_clear_round_trip() {
    let mut controller = FileSetController::new();

    // User picks two files through the input element.
    controller.replace_files(&FileEvent::from_input(vec![
        picked("report.pdf", "application/pdf", 1024),
        picked("photo.jpg", "image/jpeg", 512),
    ]));
    assert_eq!(controller.len(), 2);
    assert_eq!(controller.total_size_human(), "1.5 KB");

    // Hovering the drop target must not mutate the selection.
    let mut hover = FileEvent::empty();
    handle_drag_over(&mut hover);
    assert!(hover.default_prevented());
    assert!(hover.propagation_stopped());
    assert_eq!(controller.len(), 2);

    // A drop appends to the existing selection.
    controller.append_files(&FileEvent::from_drop(vec![picked(
        "notes.txt",
        "text/plain",
        1_048_064,
    )]));
    assert_eq!(
        controller.file_names(),
        ["report.pdf", "photo.jpg", "notes.txt"]
    );
    assert_eq!(
        controller.file_types(),
        ["application/pdf", "image/jpeg", "text/plain"]
    );
    assert_eq!(controller.total_size_bytes(), 1_049_600);
    assert_eq!(controller.total_size_human(), "1 MB");

    controller.remove_file("photo.jpg");
    assert_eq!(controller.file_names(), ["report.pdf", "notes.txt"]);

    controller.clear_all_files();
    assert!(controller.is_empty());
    assert_eq!(controller.total_size_human(), "0 Bytes");
}

#[test]
fn malformed_events_never_disturb_the_selection() {
    let mut controller = FileSetController::new();
    controller.replace_files(&FileEvent::from_input(vec![picked("keep.txt", "", 64)]));
    let before = controller.files().to_vec();

    controller.replace_files(&FileEvent::empty());
    controller.append_files(&FileEvent::empty());
    controller.remove_file(99);

    assert_eq!(controller.files(), before);
    assert_eq!(controller.total_size_bytes(), 64);
}

#[test]
fn handles_serialize_for_host_snapshots() {
    let handle = picked("photo.jpg", "image/jpeg", 512);
    let json = serde_json::to_string(&handle).unwrap();
    let restored: FileHandle = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, handle);
}
