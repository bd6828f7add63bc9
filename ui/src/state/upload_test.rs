use super::*;

#[test]
fn begin_without_file_sets_kind_specific_error() {
    let mut state = UploadState::default();
    assert_eq!(state.begin(UploadKind::Csv), Err("Please choose a CSV file."));
    assert_eq!(state.error.as_deref(), Some("Please choose a CSV file."));
    assert!(!state.busy);
}

#[test]
fn begin_with_file_marks_busy() {
    let mut state = UploadState::default();
    state.select(Some("donem.csv".to_owned()));
    assert_eq!(state.begin(UploadKind::Csv), Ok(()));
    assert!(state.busy);
    assert!(state.begin(UploadKind::Csv).is_err());
}

#[test]
fn select_empty_name_counts_as_no_file() {
    let mut state = UploadState { error: Some("old".to_owned()), ..UploadState::default() };
    state.select(Some(String::new()));
    assert!(state.selected_file.is_none());
    assert!(state.error.is_none());
}

#[test]
fn succeed_clears_selection_and_records_message() {
    let mut state = UploadState::default();
    state.select(Some("defter.xml".to_owned()));
    state.begin(UploadKind::Edefter).unwrap();
    state.succeed("ok".to_owned());
    assert!(!state.busy);
    assert!(state.selected_file.is_none());
    assert_eq!(state.success.as_deref(), Some("ok"));
}

#[test]
fn build_picks_content_type_by_kind() {
    assert_eq!(UploadKind::Csv.build("a.csv".to_owned(), vec![1]).content_type, "text/csv");
    assert_eq!(
        UploadKind::Edefter.build("a.xml".to_owned(), vec![1]).content_type,
        "application/xml"
    );
}

#[test]
fn file_name_strips_browser_fake_path() {
    assert_eq!(file_name_from_input("C:\\fakepath\\bilanco.csv").as_deref(), Some("bilanco.csv"));
    assert_eq!(file_name_from_input("defter.xml").as_deref(), Some("defter.xml"));
    assert_eq!(file_name_from_input(""), None);
}
