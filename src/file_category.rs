/// File categorization by extension.
///
/// This module maps a file extension to the category folder the file is moved
/// into when organizing. The mapping is a fixed, ordered rule table with a
/// fallback for unknown extensions.
///
/// # Examples
///
/// ```
/// use filetidy::file_category::Category;
///
/// assert_eq!(Category::from_extension(".jpg"), Category::Images);
/// assert_eq!(Category::from_extension(".zip").dir_name(), "ZIP Files");
/// assert_eq!(Category::from_extension("").dir_name(), "Uncategorized");
/// ```
use std::borrow::Cow;
use std::fmt;

/// Represents the destination category of a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Image files (JPG, JPEG, PNG, GIF)
    Images,
    /// Video files (MP4, MOV, AVI)
    Videos,
    /// Document files (DOCX, PDF, TXT)
    Documents,
    /// Any other extension, holding the uppercased extension token.
    Other(String),
    /// Files without an extension.
    Uncategorized,
}

/// Ordered extension rules. The first rule containing the token wins.
const CATEGORY_RULES: &[(&[&str], Category)] = &[
    (&["JPG", "JPEG", "PNG", "GIF"], Category::Images),
    (&["MP4", "MOV", "AVI"], Category::Videos),
    (&["DOCX", "PDF", "TXT"], Category::Documents),
];

impl Category {
    /// Classifies a file by its extension.
    ///
    /// The extension may be given with or without its leading dot and in any
    /// case. An empty extension yields [`Category::Uncategorized`].
    pub fn from_extension(extension: &str) -> Self {
        let token = extension.trim_start_matches('.').to_uppercase();

        if token.is_empty() {
            return Category::Uncategorized;
        }

        CATEGORY_RULES
            .iter()
            .find(|(extensions, _)| extensions.contains(&token.as_str()))
            .map(|(_, category)| category.clone())
            .unwrap_or(Category::Other(token))
    }

    /// Returns the directory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use filetidy::file_category::Category;
    ///
    /// assert_eq!(Category::Videos.dir_name(), "Videos");
    /// assert_eq!(Category::Other("MP3".to_string()).dir_name(), "MP3 Files");
    /// ```
    pub fn dir_name(&self) -> Cow<'static, str> {
        match self {
            Category::Images => Cow::Borrowed("Images"),
            Category::Videos => Cow::Borrowed("Videos"),
            Category::Documents => Cow::Borrowed("Documents"),
            Category::Other(token) => Cow::Owned(format!("{} Files", token)),
            Category::Uncategorized => Cow::Borrowed("Uncategorized"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dir_name())
    }
}
