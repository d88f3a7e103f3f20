use roi_review::nav::navigation::InertNavigator;
use roi_review::review::review_model::{PageLayout, ReviewInput, ReviewPage};
use roi_review::review::slot::RoiSlots;

/// `a.mp4` with all three facial ROI clips.
pub fn full_input() -> ReviewInput {
    ReviewInput::new("a.mp4")
        .with_roi("leftEye", "le.mp4")
        .with_roi("mouth", "m.mp4")
        .with_roi("nose", "n.mp4")
}

/// Default slots, inert links, default layout.
pub fn page_for(input: &ReviewInput) -> ReviewPage {
    ReviewPage::build(
        input,
        &RoiSlots::facial(),
        &InertNavigator,
        PageLayout::default(),
    )
}

/// Per-test scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("roi_review_{}", name));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Count non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
