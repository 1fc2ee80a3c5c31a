use crate::domain::{Article, Mode, Summary};
use crate::errors::DigestResult;
use crate::summarizers::traits::Summarizer;

/// Fixed digest text. It does not look at the articles it is given.
pub const MOCK_SUMMARY: &str = concat!(
    "📰 Daily News Summary\n",
    "Generated: December 12, 2025\n",
    "\n",
    "🔹 AI & Technology\n",
    "Major breakthrough in natural language processing shows promising results for future applications. \n",
    "Researchers demonstrate better understanding of context and nuance in human communication.\n",
    "\n",
    "🔹 Climate & Environment  \n",
    "Historic climate agreement reached with concrete carbon reduction targets. World leaders commit \n",
    "to net-zero emissions by 2050 with detailed action plans.\n",
    "\n",
    "🔹 Space Exploration\n",
    "Successful satellite launch expands Earth observation capabilities. New technology expected to \n",
    "provide unprecedented data on climate patterns and environmental changes.\n",
    "\n",
    "---\n",
    "Key Takeaways:\n",
    "• Significant progress in AI language understanding\n",
    "• Global commitment to climate action intensifies\n",
    "• Advanced space technology enhances Earth monitoring\n",
    "\n",
    "Total articles analyzed: 3\n",
);

pub struct CannedSummarizer;

impl CannedSummarizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CannedSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer for CannedSummarizer {
    fn mode(&self) -> Mode {
        Mode::Mock
    }

    fn summarize(&self, _articles: &[Article]) -> DigestResult<Summary> {
        Ok(Summary::new(MOCK_SUMMARY))
    }
}
