//! Integration tests for the buffer window contract
//!
//! These exercise the window the way a tokenizer drives it: construct
//! once per chunk, read through the cursor, advance and shrink as input
//! is consumed, discard at the end of the chunk.

use markup_lexer_core::{BufferWindow, RangeError};

#[test]
fn test_construct_then_read_cursor() {
    let storage: Vec<char> = "0123456789abcdef".chars().collect();
    let window = BufferWindow::new(&storage, 5, 10);
    assert_eq!(window.offset(), 5);
    assert_eq!(window.length(), 10);
}

#[test]
fn test_mutation_reflected_by_getters() {
    let storage: Vec<char> = "0123456789abcdef".chars().collect();
    let mut window = BufferWindow::new(&storage, 5, 10);
    window.set_offset(8);
    window.set_length(2);
    assert_eq!(window.offset(), 8);
    assert_eq!(window.length(), 2);
}

#[test]
fn test_storage_reference_is_stable() {
    let storage: Vec<char> = "hello world".chars().collect();
    let mut window = BufferWindow::new(&storage, 0, storage.len());
    let original = window.buffer();
    window.set_offset(6);
    window.set_length(5);
    assert!(std::ptr::eq(original, window.buffer()));
}

#[test]
fn test_incremental_consumption_covers_chunk() {
    let storage: Vec<char> = "<html lang=\"en\">".chars().collect();
    let mut window = BufferWindow::new(&storage, 0, storage.len());

    // Consume in uneven steps, the way a tokenizer pauses at state
    // boundaries.
    let mut reassembled = String::new();
    for step in [1usize, 5, 4, 6] {
        let start = window.offset();
        reassembled.extend(&window.buffer()[start..start + step]);
        window.set_offset(start + step);
        window.set_length(window.length() - step);
    }

    assert_eq!(reassembled, "<html lang=\"en\">");
    assert_eq!(window.length(), 0);
    assert_eq!(window.offset(), storage.len());
}

#[test]
fn test_window_over_middle_of_storage() {
    let storage: Vec<char> = "junk<body>junk".chars().collect();
    let window = BufferWindow::new(&storage, 4, 6);
    let visible: String = window.buffer()[window.offset()..window.offset() + window.length()]
        .iter()
        .collect();
    assert_eq!(visible, "<body>");
}

#[test]
fn test_fresh_window_per_chunk() {
    let first: Vec<char> = "<di".chars().collect();
    let second: Vec<char> = "v>".chars().collect();

    let mut window = BufferWindow::new(&first, 0, first.len());
    window.set_offset(first.len());
    window.set_length(0);

    // The next chunk gets its own window; nothing carries over.
    let window = BufferWindow::new(&second, 0, second.len());
    assert_eq!(window.offset(), 0);
    assert_eq!(window.length(), 2);
}

#[test]
fn test_try_new_accepts_boundary_windows() {
    let storage: Vec<char> = "abc".chars().collect();
    assert!(BufferWindow::try_new(&storage, 0, 3).is_ok());
    assert!(BufferWindow::try_new(&storage, 3, 0).is_ok());
    assert!(BufferWindow::try_new(&storage, 1, 2).is_ok());
}

#[test]
fn test_try_new_reports_the_bad_range() {
    let storage: Vec<char> = "abc".chars().collect();
    let err = BufferWindow::try_new(&storage, 2, 2).unwrap_err();
    assert_eq!(
        err,
        RangeError {
            offset: 2,
            length: 2,
            capacity: 3,
        }
    );
    assert!(err.to_string().contains("storage of 3 characters"));
}

#[test]
fn test_clone_copies_cursor_not_storage() {
    let storage: Vec<char> = "abcdef".chars().collect();
    let mut window = BufferWindow::new(&storage, 1, 4);
    let snapshot = window.clone();
    window.set_offset(3);
    assert_eq!(snapshot.offset(), 1);
    assert_eq!(window.offset(), 3);
    assert!(std::ptr::eq(snapshot.buffer(), window.buffer()));
}
