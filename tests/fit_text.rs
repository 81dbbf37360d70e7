//! End-to-end layout passes over the headless host.
//!
//! These exercise the public surface the way an embedder would: build a
//! content element, mirror it into a measurer, hand both to the pass with
//! container bounds, and inspect the visible result.

use fit_text::{
    Bounds, ELLIPSIS, FitError, FitTextOptions, FlexContainer, HeadlessElement, Measure, NodeKind,
    OverflowMethod, StyleProperty, StyleTarget, TextTree, WORD_ELLIPSIS, calculate_font_size,
    run_layout_pass,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// Font-size search
// =============================================================================

#[test]
fn search_finds_exact_boundary() {
    init_logs();

    // Single unwrapped char: height(f) = f * 1.15. Bound 57.5 makes 50 the
    // exact boundary - 50 fits, 51 does not.
    let mut measurer = HeadlessElement::from_text("x");
    let size = calculate_font_size(&mut measurer, 57.5, 10_000.0, 6, 72).unwrap();
    assert_eq!(size, 50);
}

#[test]
fn search_result_stays_in_range_when_nothing_fits() {
    init_logs();

    let mut measurer = HeadlessElement::from_text("wide enough to never fit");
    let size = calculate_font_size(&mut measurer, 0.5, 0.5, 6, 72).unwrap();
    assert_eq!(size, 6);
}

#[test]
fn search_rejects_degenerate_range() {
    let mut measurer = HeadlessElement::from_text("x");
    assert!(matches!(
        calculate_font_size(&mut measurer, 100.0, 100.0, 72, 72),
        Err(FitError::InvalidFontRange { min: 72, max: 72 })
    ));
}

// =============================================================================
// Fit pass
// =============================================================================

#[test]
fn fit_pass_fills_container_without_overflow() {
    init_logs();

    let bounds = FlexContainer::new(240.0, 120.0).with_padding(10.0).content_bounds();

    let mut content = HeadlessElement::builder(16.0)
        .text("Make this headline as large as it can be")
        .wrap_width(bounds.max_width)
        .build();
    let mut measurer = content.mirror();

    let outcome = run_layout_pass(&mut content, &mut measurer, bounds, &FitTextOptions::default())
        .unwrap();
    let font_size = outcome.font_size.expect("fit mode always picks a size");
    assert!((6..=72).contains(&font_size));

    // At the chosen size the measurer fits; one size up must not, unless the
    // search hit its ceiling.
    measurer.apply_style(StyleProperty::FontSize, font_size as f32);
    assert!(measurer.measure().fits(bounds) || content.is_overflown());
    if font_size < 72 {
        measurer.apply_style(StyleProperty::FontSize, (font_size + 1) as f32);
        assert!(!measurer.measure().fits(bounds));
    }
}

#[test]
fn fit_pass_is_idempotent() {
    init_logs();

    let bounds = Bounds::new(40.0, 150.0);
    let mut content = HeadlessElement::builder(16.0)
        .text("a paragraph that is going to need clamping to fit at all")
        .wrap_width(bounds.max_width)
        .build();
    let mut measurer = content.mirror();
    let options = FitTextOptions::default();

    run_layout_pass(&mut content, &mut measurer, bounds, &options).unwrap();
    let first = content.clone();
    run_layout_pass(&mut content, &mut measurer, bounds, &options).unwrap();

    assert_eq!(content, first);
}

#[test]
fn fit_pass_reruns_on_resize() {
    init_logs();

    // One measurer/content pair, two serialized passes with new bounds.
    let mut content = HeadlessElement::builder(16.0)
        .text("responsive headline")
        .wrap_width(400.0)
        .build();
    let mut measurer = content.mirror();
    let options = FitTextOptions::default();

    let large = run_layout_pass(&mut content, &mut measurer, Bounds::new(200.0, 400.0), &options)
        .unwrap();
    let small = run_layout_pass(&mut content, &mut measurer, Bounds::new(30.0, 120.0), &options)
        .unwrap();

    assert!(large.font_size.unwrap() >= small.font_size.unwrap());
    assert_eq!(content.font_size(), small.font_size.unwrap() as f32);
}

// =============================================================================
// Character truncation
// =============================================================================

/// Content wrapper that counts text writes, to pin down the
/// write-once-after-convergence contract.
struct CountingContent {
    inner: HeadlessElement,
    writes: usize,
}

impl TextTree for CountingContent {
    fn child_count(&self) -> usize {
        self.inner.child_count()
    }

    fn node_kind(&self, index: usize) -> NodeKind {
        self.inner.node_kind(index)
    }

    fn text_content(&self, index: usize) -> String {
        self.inner.text_content(index)
    }

    fn set_text_content(&mut self, index: usize, text: &str) {
        self.writes += 1;
        self.inner.set_text_content(index, text);
    }

    fn full_text(&self) -> String {
        self.inner.full_text()
    }

    fn set_full_text(&mut self, text: &str) {
        self.writes += 1;
        self.inner.set_full_text(text);
    }
}

#[test]
fn truncation_writes_live_content_exactly_once() {
    init_logs();

    let element = HeadlessElement::builder(16.0)
        .text("Hello World")
        .wrap_width(60.0)
        .build();
    let mut measurer = element.mirror();
    let mut content = CountingContent {
        inner: element,
        writes: 0,
    };

    fit_text::truncate(&mut content, &mut measurer, 19.0);

    assert_eq!(content.writes, 1);
    let text = content.text_content(0);
    assert!(text.ends_with(ELLIPSIS));
    assert!(measurer.measure().height <= 19.0);
}

#[test]
fn truncation_skips_content_that_already_fits() {
    let element = HeadlessElement::from_text("fits fine");
    let mut measurer = element.mirror();
    let mut content = CountingContent {
        inner: element,
        writes: 0,
    };

    fit_text::truncate(&mut content, &mut measurer, 100.0);

    assert_eq!(content.writes, 0);
    assert_eq!(content.full_text(), "fits fine");
}

#[test]
fn truncation_aborts_on_element_only_children() {
    init_logs();

    let mut content = HeadlessElement::builder(16.0)
        .element("span one")
        .element("span two")
        .build();
    let mut measurer = content.mirror();
    let before = content.clone();
    let options = FitTextOptions {
        overflow: OverflowMethod::Truncate,
        font_size: None,
        ..Default::default()
    };

    // Overflow stays unresolved; that is the documented failure mode.
    run_layout_pass(&mut content, &mut measurer, Bounds::new(1.0, 1.0), &options).unwrap();

    assert_eq!(content, before);
}

// =============================================================================
// Word truncation
// =============================================================================

#[test]
fn word_truncation_pass_ends_with_marker() {
    init_logs();

    let mut content = HeadlessElement::builder(16.0)
        .text("the quick brown fox jumps over the lazy dog")
        .wrap_width(100.0)
        .build();
    let mut measurer = content.mirror();
    let options = FitTextOptions {
        overflow: OverflowMethod::TruncateWords,
        font_size: None,
        ..Default::default()
    };

    run_layout_pass(&mut content, &mut measurer, Bounds::new(19.0, 100.0), &options).unwrap();

    let text = content.full_text();
    assert!(text.ends_with(WORD_ELLIPSIS), "got {text:?}");
    assert!(text.starts_with("the"));
    assert!(measurer.measure().height <= 19.0);
}

#[test]
fn word_truncation_pass_keeps_fitting_text_unchanged() {
    let mut content = HeadlessElement::from_text("already fits");
    let mut measurer = content.mirror();
    let options = FitTextOptions {
        overflow: OverflowMethod::TruncateWords,
        font_size: None,
        ..Default::default()
    };

    run_layout_pass(&mut content, &mut measurer, Bounds::new(100.0, 1000.0), &options).unwrap();

    assert_eq!(content.full_text(), "already fits");
}

// =============================================================================
// Fixed-size clamp fallback
// =============================================================================

#[test]
fn fixed_size_truncate_pass_prefers_clamping() {
    init_logs();

    let options = FitTextOptions::from_attrs([
        ("overflow", "truncate"),
        ("font-size", "24px"),
    ]);
    assert_eq!(options.overflow, OverflowMethod::Truncate);

    let mut content = HeadlessElement::builder(16.0)
        .text("clamped, not rewritten, because a fixed size is configured")
        .wrap_width(150.0)
        .build();
    let mut measurer = content.mirror();

    let outcome =
        run_layout_pass(&mut content, &mut measurer, Bounds::new(40.0, 150.0), &options).unwrap();

    assert_eq!(outcome.font_size, Some(24));
    assert_eq!(content.font_size(), 24.0);
    assert!(content.full_text().contains("rewritten"));
    assert!(content.is_overflown());
    assert_eq!(content.line_clamp(), Some(1)); // floor(40 / 27.6)
}
