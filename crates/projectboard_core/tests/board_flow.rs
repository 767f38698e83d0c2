use projectboard_core::{
    Board, DragEffect, DragTransfer, InMemorySurface, ProjectStatus, TEXT_PLAIN,
};

fn mounted_board() -> Board<InMemorySurface> {
    Board::mount(InMemorySurface::new())
}

#[test]
fn submit_then_drop_moves_project_between_lists() {
    let mut board = mounted_board();

    board.fill_form("Build API", "Implement REST endpoints", "3");
    board.submit();

    assert_eq!(board.projects().len(), 1);
    let active = board.list(ProjectStatus::Active).assigned();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Build API");
    assert!(board.list(ProjectStatus::Finished).assigned().is_empty());

    let transfer = board
        .begin_drag(ProjectStatus::Active, 0)
        .expect("first active item should be draggable");
    assert_eq!(transfer.first_kind(), Some(TEXT_PLAIN));
    assert_eq!(transfer.allowed_effect(), Some(DragEffect::Move));

    board.drag_over(ProjectStatus::Finished);
    board.drop_on(ProjectStatus::Finished, &transfer);

    assert!(board.list(ProjectStatus::Active).assigned().is_empty());
    let finished = board.list(ProjectStatus::Finished).assigned();
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].title, "Build API");
    assert_eq!(finished[0].description, "Implement REST endpoints");
    assert_eq!(finished[0].people_count, 3);
    assert_eq!(finished[0].status, ProjectStatus::Finished);
}

#[test]
fn dropping_back_on_the_same_list_changes_nothing() {
    let mut board = mounted_board();
    board.fill_form("Build API", "Implement REST endpoints", "3");
    board.submit();

    let transfer = board
        .begin_drag(ProjectStatus::Active, 0)
        .expect("first active item should be draggable");
    board.drop_on(ProjectStatus::Active, &transfer);

    assert_eq!(board.list(ProjectStatus::Active).assigned().len(), 1);
    assert!(board.list(ProjectStatus::Finished).assigned().is_empty());
}

#[test]
fn begin_drag_out_of_range_returns_none() {
    let board = mounted_board();
    assert!(board.begin_drag(ProjectStatus::Active, 0).is_none());
}

#[test]
fn drop_with_unknown_id_is_ignored_but_clears_the_mark() {
    let mut board = mounted_board();
    board.fill_form("Build API", "Implement REST endpoints", "3");
    board.submit();

    let mut transfer = DragTransfer::new();
    transfer.set_data(TEXT_PLAIN, "00000000-0000-4000-8000-000000000000");

    board.drag_over(ProjectStatus::Finished);
    board.drop_on(ProjectStatus::Finished, &transfer);

    assert!(board.list(ProjectStatus::Finished).assigned().is_empty());
    assert_eq!(board.list(ProjectStatus::Active).assigned().len(), 1);
    let surface = board.surface();
    let list_node = board.list(ProjectStatus::Finished).node();
    assert!(!surface.borrow().has_class(list_node, "droppable"));
}

#[test]
fn drop_with_foreign_payload_kind_keeps_the_mark_and_state() {
    let mut board = mounted_board();
    board.fill_form("Build API", "Implement REST endpoints", "3");
    board.submit();

    let mut transfer = DragTransfer::new();
    transfer.set_data("text/html", "<p>not a project id</p>");

    board.drag_over(ProjectStatus::Finished);
    board.drop_on(ProjectStatus::Finished, &transfer);

    // Legacy behavior: the unrecognized-payload branch never clears the
    // drop-target mark.
    let surface = board.surface();
    let list_node = board.list(ProjectStatus::Finished).node();
    assert!(surface.borrow().has_class(list_node, "droppable"));
    assert_eq!(board.list(ProjectStatus::Active).assigned().len(), 1);
    assert!(board.list(ProjectStatus::Finished).assigned().is_empty());

    board.drag_leave(ProjectStatus::Finished);
    assert!(!surface.borrow().has_class(list_node, "droppable"));
}

#[test]
fn render_text_shows_both_lists_and_items() {
    let mut board = mounted_board();
    board.fill_form("Build API", "Implement REST endpoints", "3");
    board.submit();

    let text = board.render_text();
    assert!(text.contains("id=\"active-projects-list\""));
    assert!(text.contains("id=\"finished-projects-list\""));
    assert!(text.contains("<h3>Build API</h3>"));
    assert!(text.contains("<strong>3 Persons Assigned</strong>"));
}
