//! Cosmetic class tokens attached to emitted elements.
//!
//! Defaults follow a utility-CSS vocabulary. Nothing in the renderer depends
//! on them; an empty string omits the `class` attribute.

use serde::Deserialize;

use crate::model::{HeadingLevel, ListFormat};

/// Class tokens per element kind.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub paragraph: String,
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub h4: String,
    pub h5: String,
    pub h6: String,
    pub ordered_list: String,
    pub unordered_list: String,
    pub list_item: String,
    pub quote: String,
    /// Applied to the `<pre>` wrapper. The inner `<code>` always carries the
    /// `language-*` marker.
    pub code_block: String,
    pub figure: String,
    pub image: String,
    pub caption: String,
    /// Applied to every `<a>`, inline or standalone.
    pub link: String,
    /// Applied to the block container around a standalone link.
    pub link_block: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            paragraph: "mb-4 leading-relaxed".to_owned(),
            h1: "text-4xl font-bold mt-8 mb-4".to_owned(),
            h2: "text-3xl font-bold mt-8 mb-4".to_owned(),
            h3: "text-2xl font-semibold mt-6 mb-3".to_owned(),
            h4: "text-xl font-semibold mt-6 mb-3".to_owned(),
            h5: "text-lg font-semibold mt-4 mb-2".to_owned(),
            h6: "text-base font-semibold mt-4 mb-2".to_owned(),
            ordered_list: "list-decimal pl-6 mb-4".to_owned(),
            unordered_list: "list-disc pl-6 mb-4".to_owned(),
            list_item: "mb-1".to_owned(),
            quote: "border-l-4 border-gray-300 pl-4 italic text-gray-700 my-6".to_owned(),
            code_block: "bg-gray-900 text-gray-100 rounded-lg p-4 overflow-x-auto mb-4".to_owned(),
            figure: "my-6".to_owned(),
            image: "rounded-lg max-w-full h-auto".to_owned(),
            caption: "mt-2 text-sm text-center text-gray-500".to_owned(),
            link: "text-blue-600 underline hover:text-blue-800".to_owned(),
            link_block: "mb-4".to_owned(),
        }
    }
}

impl ClassNames {
    /// No class attributes at all.
    #[must_use]
    pub fn none() -> Self {
        Self {
            paragraph: String::new(),
            h1: String::new(),
            h2: String::new(),
            h3: String::new(),
            h4: String::new(),
            h5: String::new(),
            h6: String::new(),
            ordered_list: String::new(),
            unordered_list: String::new(),
            list_item: String::new(),
            quote: String::new(),
            code_block: String::new(),
            figure: String::new(),
            image: String::new(),
            caption: String::new(),
            link: String::new(),
            link_block: String::new(),
        }
    }

    pub(crate) fn heading(&self, level: HeadingLevel) -> &str {
        match level {
            HeadingLevel::H1 => &self.h1,
            HeadingLevel::H2 => &self.h2,
            HeadingLevel::H3 => &self.h3,
            HeadingLevel::H4 => &self.h4,
            HeadingLevel::H5 => &self.h5,
            HeadingLevel::H6 => &self.h6,
        }
    }

    pub(crate) fn list(&self, format: ListFormat) -> &str {
        match format {
            ListFormat::Ordered => &self.ordered_list,
            ListFormat::Unordered => &self.unordered_list,
        }
    }
}
