use serde::Serialize;

use super::slide::Slide;

/// The full ordered sequence of slides compiled from one document.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Deck {
    slides: Vec<Slide>,
}

/// A maximal run of consecutive slides sharing one chapter label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterRun {
    pub label: String,
    /// Index of the first slide in the run.
    pub start: usize,
    /// Number of slides in the run.
    pub len: usize,
}

impl ChapterRun {
    /// Whether the given slide index falls inside this run.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.start + self.len
    }
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Chapter segmentation for progress display: each run covers the
    /// maximal stretch of consecutive slides with the same label.
    pub fn chapter_runs(&self) -> Vec<ChapterRun> {
        let mut runs: Vec<ChapterRun> = Vec::new();
        for (index, slide) in self.slides.iter().enumerate() {
            match runs.last_mut() {
                Some(run) if run.label == slide.chapter => run.len += 1,
                _ => runs.push(ChapterRun {
                    label: slide.chapter.clone(),
                    start: index,
                    len: 1,
                }),
            }
        }
        runs
    }

    /// Derive a copy of this deck with the image of the slide carrying `id`
    /// replaced. The matching slide value is replaced wholesale; nothing is
    /// mutated in place. An unknown id yields an unchanged copy.
    pub fn with_image(&self, id: u32, image: Option<String>) -> Deck {
        let slides = self
            .slides
            .iter()
            .map(|slide| {
                if slide.id == id {
                    Slide {
                        image: image.clone(),
                        ..slide.clone()
                    }
                } else {
                    slide.clone()
                }
            })
            .collect();
        Deck::new(slides)
    }
}

impl From<Vec<Slide>> for Deck {
    fn from(slides: Vec<Slide>) -> Self {
        Deck::new(slides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::slide_in_chapter;

    #[test]
    fn chapter_runs_group_consecutive_labels() {
        let deck = Deck::new(vec![
            slide_in_chapter(1, "Opening"),
            slide_in_chapter(2, "Opening"),
            slide_in_chapter(3, "Middle"),
            slide_in_chapter(4, "Opening"),
        ]);

        let runs = deck.chapter_runs();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].label, "Opening");
        assert_eq!((runs[0].start, runs[0].len), (0, 2));
        assert_eq!((runs[1].start, runs[1].len), (2, 1));
        // A repeated label after a gap is a new run, not a merge.
        assert_eq!(runs[2].label, "Opening");
        assert_eq!((runs[2].start, runs[2].len), (3, 1));
    }

    #[test]
    fn chapter_run_contains_checks_bounds() {
        let run = ChapterRun {
            label: "A".to_string(),
            start: 2,
            len: 2,
        };
        assert!(!run.contains(1));
        assert!(run.contains(2));
        assert!(run.contains(3));
        assert!(!run.contains(4));
    }

    #[test]
    fn with_image_replaces_only_the_matching_slide() {
        let deck = Deck::new(vec![slide_in_chapter(1, "A"), slide_in_chapter(2, "A")]);

        let updated = deck.with_image(2, Some("asset://chart".to_string()));

        assert_eq!(updated.get(0).unwrap().image, None);
        assert_eq!(
            updated.get(1).unwrap().image,
            Some("asset://chart".to_string())
        );
        // The source deck is untouched.
        assert_eq!(deck.get(1).unwrap().image, None);
    }

    #[test]
    fn with_image_clears_an_image() {
        let deck = Deck::new(vec![slide_in_chapter(1, "A")]);
        let with = deck.with_image(1, Some("asset://x".to_string()));
        let without = with.with_image(1, None);
        assert_eq!(without.get(0).unwrap().image, None);
    }

    #[test]
    fn with_image_with_unknown_id_is_a_noop_copy() {
        let deck = Deck::new(vec![slide_in_chapter(1, "A")]);
        let updated = deck.with_image(99, Some("asset://x".to_string()));
        assert_eq!(updated, deck);
    }

    #[test]
    fn empty_deck_has_no_runs() {
        assert!(Deck::default().chapter_runs().is_empty());
        assert!(Deck::default().is_empty());
    }
}
