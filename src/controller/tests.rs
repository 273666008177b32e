//! Tests for the view controller, driven through the headless host.

use std::time::Duration;

use folio_dom::{Document, Region, ACTIVE_CLASS, HIDDEN_CLASS};

use super::DesktopView;
use crate::catalog::Catalog;
use crate::config::LayoutConfig;
use crate::headless::Headless;
use crate::message::Message;
use crate::overlay::OverlayPhase;
use crate::render::{render_detail, render_welcome};

const DESKTOP: f64 = 1280.0;
const MOBILE: f64 = 800.0;

fn host(width: f64) -> Headless {
    Headless::new(Catalog::builtin(), LayoutConfig::default(), width)
}

fn detail_of(id: u32) -> String {
    let catalog = Catalog::builtin();
    render_detail(catalog.get(id).expect("builtin project"))
}

#[test]
fn test_mount_renders_list_in_order() {
    let host = host(DESKTOP);
    let labels: Vec<&str> = host.doc.entries().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Hormoni", "MatrixMindz", "SIFT", "OAKE", "Ask Why I Run", "Dodo Compositions"]
    );
    assert!(host.doc.active_entries().is_empty());
}

#[test]
fn test_every_project_renders_its_title() {
    let mut host = host(DESKTOP);
    let projects: Vec<(u32, String)> = Catalog::builtin()
        .iter()
        .map(|p| (p.id, p.title.clone()))
        .collect();

    for (id, title) in projects {
        host.send(Message::SelectProject(id));
        let expected = format!(r#"<h2 class="project-title">{}</h2>"#, title);
        assert!(host.doc.inner_html(Region::Display).contains(&expected));
    }
}

#[test]
fn test_desktop_selection() {
    let mut host = host(DESKTOP);
    host.send(Message::SelectProject(3));

    assert_eq!(host.doc.inner_html(Region::Display), detail_of(3));
    assert!(host.doc.is_displayed(Region::StaticClose));
    assert_eq!(host.doc.active_entries(), vec![3]);
    assert_eq!(host.controller.desktop_view(), DesktopView::Project(3));
    assert_eq!(host.controller.overlay_phase(), OverlayPhase::Closed);
    assert!(!host.doc.is_scroll_locked());
    assert_eq!(host.pending(), 0);
}

#[test]
fn test_mobile_selection_opens_overlay() {
    let mut host = host(MOBILE);
    host.send(Message::SelectProject(2));

    assert_eq!(host.doc.inner_html(Region::OverlayContent), detail_of(2));
    assert!(!host.doc.has_class(Region::Overlay, HIDDEN_CLASS));
    assert!(host.doc.is_scroll_locked());
    // Active class waits for the next frame so the transition can run
    assert!(!host.doc.has_class(Region::Overlay, ACTIVE_CLASS));

    host.frame();
    assert!(host.doc.has_class(Region::Overlay, ACTIVE_CLASS));
    assert_eq!(host.controller.overlay_phase(), OverlayPhase::Open);
    assert_eq!(host.doc.inner_html(Region::Display), render_welcome());
}

#[test]
fn test_breakpoint_is_inclusive_for_overlay() {
    let mut narrow = host(1024.0);
    narrow.send(Message::SelectProject(1));
    assert_eq!(narrow.controller.overlay_phase(), OverlayPhase::Opening);

    let mut wide = host(1025.0);
    wide.send(Message::SelectProject(1));
    assert_eq!(wide.controller.desktop_view(), DesktopView::Project(1));
}

#[test]
fn test_selection_is_idempotent() {
    let mut host = host(DESKTOP);
    host.send(Message::SelectProject(5));
    let first = host.doc.inner_html(Region::Display).to_string();
    host.send(Message::SelectProject(5));

    assert_eq!(host.doc.inner_html(Region::Display), first);
    assert_eq!(host.doc.active_entries(), vec![5]);
}

#[test]
fn test_active_marking_follows_id() {
    let json = r#"[
        {"id": 1, "title": "Twin", "tags": ["a"]},
        {"id": 2, "title": "Twin", "tags": ["b"]}
    ]"#;
    let catalog = Catalog::from_json(json).expect("valid catalog");
    let mut host = Headless::new(catalog, LayoutConfig::default(), DESKTOP);

    host.send(Message::SelectProject(2));
    assert_eq!(host.doc.active_entries(), vec![2]);
}

#[test]
fn test_unknown_project_is_ignored() {
    let mut host = host(DESKTOP);
    host.send(Message::SelectProject(4));
    host.send(Message::SelectProject(99));

    assert_eq!(host.controller.active_project_id(), Some(4));
    assert_eq!(host.doc.inner_html(Region::Display), detail_of(4));
    assert_eq!(host.doc.active_entries(), vec![4]);
}

#[test]
fn test_reset_on_desktop_restores_welcome() {
    let mut host = host(DESKTOP);
    host.send(Message::SelectProject(6));
    host.send(Message::ResetToHome);

    assert_eq!(host.controller.active_project_id(), None);
    assert!(host.doc.active_entries().is_empty());
    assert_eq!(host.doc.inner_html(Region::Display), render_welcome());
    assert!(!host.doc.is_displayed(Region::StaticClose));
    assert_eq!(host.controller.desktop_view(), DesktopView::Welcome);
}

#[test]
fn test_reset_on_mobile_closes_overlay() {
    let mut host = host(MOBILE);
    host.send(Message::SelectProject(6));
    host.frame();
    host.send(Message::ResetToHome);

    assert_eq!(host.controller.active_project_id(), None);
    assert!(host.doc.active_entries().is_empty());
    assert!(!host.doc.has_class(Region::Overlay, ACTIVE_CLASS));
    assert_eq!(host.controller.overlay_phase(), OverlayPhase::Closing);
}

#[test]
fn test_close_restores_scroll_only_after_transition() {
    let mut host = host(MOBILE);
    host.send(Message::SelectProject(1));
    host.frame();
    host.send(Message::CloseOverlay);

    assert!(!host.doc.has_class(Region::Overlay, ACTIVE_CLASS));
    assert!(host.doc.active_entries().is_empty());
    assert!(host.doc.is_scroll_locked());

    host.wait(Duration::from_millis(299));
    assert!(host.doc.is_scroll_locked());

    host.wait(Duration::from_millis(1));
    assert!(!host.doc.is_scroll_locked());
    assert_eq!(host.controller.overlay_phase(), OverlayPhase::Closed);
    assert_eq!(host.now(), Duration::from_millis(300));
}

#[test]
fn test_close_when_already_closed_schedules_nothing() {
    let mut host = host(MOBILE);
    host.send(Message::CloseOverlay);
    assert_eq!(host.pending(), 0);
    assert!(!host.doc.is_scroll_locked());
}

#[test]
fn test_reopen_survives_stale_close_timer() {
    let mut host = host(MOBILE);
    host.send(Message::SelectProject(1));
    host.frame();
    host.send(Message::CloseOverlay);

    host.wait(Duration::from_millis(100));
    host.send(Message::SelectProject(2));
    host.frame();

    // The first close timer fires here and must not unlock scroll
    host.wait(Duration::from_millis(250));
    assert!(host.doc.is_scroll_locked());
    assert!(host.doc.has_class(Region::Overlay, ACTIVE_CLASS));
    assert_eq!(host.controller.overlay_phase(), OverlayPhase::Open);
}

#[test]
fn test_close_before_frame_keeps_overlay_inactive() {
    let mut host = host(MOBILE);
    host.send(Message::SelectProject(1));
    host.send(Message::CloseOverlay);
    host.frame();

    assert!(!host.doc.has_class(Region::Overlay, ACTIVE_CLASS));
    host.wait(Duration::from_millis(300));
    assert!(!host.doc.is_scroll_locked());
}

#[test]
fn test_resize_moves_overlay_selection_inline() {
    let mut host = host(MOBILE);
    host.send(Message::SelectProject(4));
    host.frame();

    host.resize(DESKTOP);
    assert_eq!(host.doc.inner_html(Region::Display), detail_of(4));
    assert!(host.doc.is_displayed(Region::StaticClose));
    assert!(!host.doc.has_class(Region::Overlay, ACTIVE_CLASS));
    assert_eq!(host.controller.overlay_phase(), OverlayPhase::Closing);
    // Selection survives the forced close
    assert_eq!(host.controller.active_project_id(), Some(4));
    assert_eq!(host.doc.active_entries(), vec![4]);

    host.wait(Duration::from_millis(300));
    assert!(!host.doc.is_scroll_locked());
}

#[test]
fn test_resize_replaces_stale_desktop_detail() {
    let mut host = host(DESKTOP);
    host.send(Message::SelectProject(1));
    host.resize(MOBILE);
    host.send(Message::SelectProject(2));
    host.frame();

    host.resize(DESKTOP);
    assert_eq!(host.doc.inner_html(Region::Display), detail_of(2));
}

#[test]
fn test_resize_without_selection_does_nothing() {
    let mut host = host(MOBILE);
    host.resize(DESKTOP);
    assert_eq!(host.doc.inner_html(Region::Display), render_welcome());
    assert_eq!(host.pending(), 0);
}

#[test]
fn test_shrinking_is_not_reconciled() {
    let mut host = host(DESKTOP);
    host.send(Message::SelectProject(3));
    host.resize(MOBILE);

    assert_eq!(host.controller.overlay_phase(), OverlayPhase::Closed);
    assert_eq!(host.doc.inner_html(Region::Display), detail_of(3));
    assert_eq!(host.doc.viewport_width(), MOBILE);
}

#[test]
fn test_resize_after_overlay_close_keeps_welcome() {
    let mut host = host(MOBILE);
    host.send(Message::SelectProject(2));
    host.frame();
    host.send(Message::CloseOverlay);
    host.wait(Duration::from_millis(300));

    host.resize(DESKTOP);
    assert_eq!(host.doc.inner_html(Region::Display), render_welcome());
}

#[test]
fn test_custom_transition_delay() {
    let layout = LayoutConfig {
        overlay_transition_ms: 500,
        ..LayoutConfig::default()
    };
    let mut host = Headless::new(Catalog::builtin(), layout, MOBILE);
    host.send(Message::SelectProject(1));
    host.frame();
    host.send(Message::CloseOverlay);

    host.wait(Duration::from_millis(400));
    assert!(host.doc.is_scroll_locked());
    host.wait(Duration::from_millis(100));
    assert!(!host.doc.is_scroll_locked());
}
