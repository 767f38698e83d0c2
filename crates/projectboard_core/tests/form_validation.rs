use projectboard_core::{Board, InMemorySurface, InputPolicy, ProjectStatus, INVALID_INPUT_MESSAGE};

fn mounted_board() -> Board<InMemorySurface> {
    Board::mount(InMemorySurface::new())
}

fn submit_and_expect_rejection(board: &mut Board<InMemorySurface>) {
    let before = board.projects().len();
    board.submit();
    assert_eq!(board.projects().len(), before, "store must stay unchanged");
    assert_eq!(board.drain_alerts(), vec![INVALID_INPUT_MESSAGE]);
}

#[test]
fn empty_title_is_rejected() {
    let mut board = mounted_board();
    board.fill_form("", "Implement REST endpoints", "3");
    submit_and_expect_rejection(&mut board);
}

#[test]
fn whitespace_title_is_rejected() {
    let mut board = mounted_board();
    board.fill_form("   ", "Implement REST endpoints", "3");
    submit_and_expect_rejection(&mut board);
}

#[test]
fn description_length_boundaries_follow_the_policy() {
    let policy = InputPolicy::default();

    let mut board = mounted_board();
    let at_min = "x".repeat(policy.description_min_length);
    board.fill_form("Build API", &at_min, "3");
    board.submit();
    assert_eq!(board.projects().len(), 1);
    assert!(board.drain_alerts().is_empty());

    let below_min = "x".repeat(policy.description_min_length - 1);
    board.fill_form("Build API", &below_min, "3");
    submit_and_expect_rejection(&mut board);

    let over_max = "x".repeat(policy.description_max_length + 1);
    board.fill_form("Build API", &over_max, "3");
    submit_and_expect_rejection(&mut board);
}

#[test]
fn people_count_boundaries_are_inclusive() {
    let mut board = mounted_board();

    for valid in ["1", "10"] {
        board.fill_form("Build API", "Implement REST endpoints", valid);
        board.submit();
        assert!(board.drain_alerts().is_empty(), "people={valid} must pass");
    }
    assert_eq!(board.projects().len(), 2);

    for invalid in ["0", "11", "", "many"] {
        board.fill_form("Build API", "Implement REST endpoints", invalid);
        submit_and_expect_rejection(&mut board);
    }
}

#[test]
fn rejected_submit_keeps_field_values() {
    let mut board = mounted_board();
    board.fill_form("Build API", "abc", "3");
    submit_and_expect_rejection(&mut board);

    // Retrying without refilling submits the same retained values.
    board.submit();
    assert_eq!(board.drain_alerts(), vec![INVALID_INPUT_MESSAGE]);
    assert!(board.projects().is_empty());
}

#[test]
fn accepted_submit_clears_the_fields() {
    let mut board = mounted_board();
    board.fill_form("Build API", "Implement REST endpoints", "3");
    board.submit();
    assert_eq!(board.projects().len(), 1);

    // The fields were cleared, so an immediate re-submit fails validation
    // instead of adding a duplicate.
    board.submit();
    assert_eq!(board.projects().len(), 1);
    assert_eq!(board.drain_alerts(), vec![INVALID_INPUT_MESSAGE]);
}

#[test]
fn custom_policy_tightens_the_description_limit() {
    let policy = InputPolicy {
        description_max_length: 10,
        ..InputPolicy::default()
    };
    let mut board = Board::mount_with_policy(InMemorySurface::new(), policy);

    board.fill_form("Build API", "short desc", "3");
    board.submit();
    assert_eq!(board.projects().len(), 1);
    assert!(board.drain_alerts().is_empty());

    board.fill_form("Build API", "a little too long", "3");
    board.submit();
    assert_eq!(board.projects().len(), 1);
    assert_eq!(board.drain_alerts(), vec![INVALID_INPUT_MESSAGE]);
    assert_eq!(
        board.list(ProjectStatus::Active).assigned().len(),
        1,
        "rejected submit must not re-render extra items"
    );
}
