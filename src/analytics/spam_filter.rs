//! キーワードベースのスパム判定

/// スパムとみなす語句（小文字、部分一致）
pub const SPAM_KEYWORDS: [&str; 9] = [
    "subscribe",
    "check out",
    "follow me",
    "click",
    "link",
    "giveaway",
    "win",
    "visit my channel",
    "free",
];

/// いずれかのキーワードを含む場合にスパムと判定する（大文字小文字を区別しない）
pub fn is_spam(text: &str) -> bool {
    let lowered = text.to_lowercase();
    SPAM_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// スパムでないコメントだけを元の順序のまま残す
pub fn filter_spam<S: AsRef<str>>(comments: impl IntoIterator<Item = S>) -> Vec<S> {
    comments
        .into_iter()
        .filter(|comment| !is_spam(comment.as_ref()))
        .collect()
}
