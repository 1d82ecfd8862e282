//! Tests for page math.

use pickset_lib::error::PaginatorError;
use pickset_lib::paginator::{DEFAULT_PER_PAGE, PageChange, Paginator};

#[test]
fn test_defaults() {
    let paginator = Paginator::new(42);
    assert_eq!(paginator.per_page(), DEFAULT_PER_PAGE);
    assert_eq!(paginator.total_pages(), 3);
    assert_eq!(paginator.page(), 0);
    assert_eq!(paginator.select_options(), &[5, 10, 15, 25, 50, 100, 500]);
}

#[test]
fn test_page_size_changes_page_count() {
    let mut paginator = Paginator::new(42);
    paginator.set_per_page(10).unwrap();
    assert_eq!(paginator.total_pages(), 5);
}

#[test]
fn test_page_clamps_when_page_size_grows() {
    let mut paginator = Paginator::new(42);
    paginator.set_per_page(10).unwrap();
    assert_eq!(
        paginator.last_page(),
        Some(PageChange {
            previous: 0,
            current: 4
        })
    );

    paginator.set_per_page(21).unwrap();
    assert_eq!(paginator.total_pages(), 2);
    assert_eq!(paginator.page(), 1);
    assert!(paginator.is_last_page());
}

#[test]
fn test_custom_page_size_joins_options() {
    let mut paginator = Paginator::with_per_page(25, 7).unwrap();
    paginator.set_select_options(&[3, 10, 25, 40]);
    assert_eq!(paginator.select_options(), &[3, 7, 10, 25, 40]);
    assert_eq!(paginator.total_pages(), 4);
}

#[test]
fn test_zero_page_size_is_rejected() {
    assert_eq!(
        Paginator::with_per_page(10, 0).unwrap_err(),
        PaginatorError::InvalidPageSize(0)
    );
    let mut paginator = Paginator::new(10);
    assert!(paginator.set_per_page(0).is_err());
    assert_eq!(paginator.per_page(), DEFAULT_PER_PAGE);
}

#[test]
fn test_navigation() {
    let mut paginator = Paginator::with_per_page(42, 10).unwrap();

    assert!(paginator.is_first_page());
    assert_eq!(paginator.previous_page(), None);
    assert_eq!(
        paginator.next_page(),
        Some(PageChange {
            previous: 0,
            current: 1
        })
    );
    assert_eq!(paginator.page_range(), 10..20);

    assert_eq!(paginator.paginate(1), None);
    assert_eq!(paginator.paginate(9), None);
    paginator.paginate(4).unwrap();
    assert_eq!(paginator.page_range(), 40..42);
    assert_eq!(paginator.next_page(), None);

    assert_eq!(
        paginator.first_page(),
        Some(PageChange {
            previous: 4,
            current: 0
        })
    );
}

#[test]
fn test_empty_paginator() {
    let mut paginator = Paginator::default();
    assert_eq!(paginator.total_pages(), 0);
    assert!(paginator.is_first_page());
    assert!(paginator.is_last_page());
    assert_eq!(paginator.page_range(), 0..0);
    assert_eq!(paginator.last_page(), None);
    assert_eq!(paginator.next_page(), None);
}

#[test]
fn test_shrinking_records_clamps_page() {
    let mut paginator = Paginator::with_per_page(100, 10).unwrap();
    paginator.last_page();
    assert_eq!(paginator.page(), 9);

    paginator.set_total_records(35);
    assert_eq!(paginator.page(), 3);
    assert_eq!(paginator.page_range(), 30..35);
}
