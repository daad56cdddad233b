use once_cell::sync::Lazy;

/// Leet-speak substitution table. Each letter maps to the symbols it is
/// commonly swapped for; the original letter always remains a valid choice.
const LEET_MAP: &[(char, &[char])] = &[
    ('a', &['@', '4']),
    ('e', &['3']),
    ('i', &['1', '!']),
    ('o', &['0']),
    ('s', &['$', '5']),
    ('t', &['7']),
    ('l', &['1']),
    ('g', &['9']),
    ('b', &['8']),
];

/// Symbols users append or prepend to satisfy complexity rules.
const SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '*'];

/// Digit runs that show up as suffixes far more often than plain counters.
const COMMON_NUMBER_SUFFIXES: &[&str] = &[
    "01", "001", "0001", "12", "123", "1234", "12345", "123456",
    "007", "69", "420", "666", "777", "888", "999", "000", "101", "143", "1337",
];

/// Passwords that keep appearing in breach corpora.
const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "password123", "admin", "letmein",
    "welcome", "monkey", "dragon", "master", "sunshine",
    "princess", "qwerty", "abc123", "111111", "iloveyou",
    "admin123", "password1", "12345678", "123456789", "1234567890",
];

// Adjacent-key sequences: every QWERTY row substring of length >= 4 plus the
// walks that cross rows. Built once, emitted as standalone candidates.
static KEYBOARD_WALKS: Lazy<Vec<String>> = Lazy::new(|| {
    let rows = ["qwertyuiop", "asdfghjkl", "zxcvbnm", "1234567890"];
    let mut walks = Vec::new();

    for row in rows {
        for start in 0..row.len().saturating_sub(3) {
            for end in (start + 4)..=row.len() {
                walks.push(row[start..end].to_string());
            }
        }
    }

    for walk in ["1qaz2wsx", "qazwsx", "!qaz@wsx", "1q2w3e4r", "qweasd", "123qwe"] {
        walks.push(walk.to_string());
    }

    walks
});

/// Built-in weak password catalog, used as extra seed terms.
pub fn common_passwords() -> &'static [&'static str] {
    COMMON_PASSWORDS
}

/// Keyboard walk candidates. Independent of any seed term.
pub fn keyboard_walks() -> &'static [String] {
    &KEYBOARD_WALKS
}

/// Append every year in the inclusive range as both a four-digit and a
/// two-digit suffix. The caller is responsible for validating the range.
pub fn year_suffixes(word: &str, start_year: u16, end_year: u16) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity((end_year.saturating_sub(start_year) as usize + 1) * 2);
    for year in start_year..=end_year {
        out.push(format!("{}{}", word, year));
        out.push(format!("{}{:02}", word, year % 100));
    }
    out
}

/// Append zero-padded month suffixes 01-12.
pub fn month_suffixes(word: &str) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }
    (1..=12u8).map(|m| format!("{}{:02}", word, m)).collect()
}

/// Append zero-padded day suffixes 01-31. Days are not validated against any
/// month; users append "31" to passwords regardless of the calendar.
pub fn day_suffixes(word: &str) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }
    (1..=31u8).map(|d| format!("{}{:02}", word, d)).collect()
}

/// Append every integer from 0 to `max_number` (natural width) plus the
/// common digit-run catalog.
pub fn number_suffixes(word: &str, max_number: u32) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(max_number as usize + 1 + COMMON_NUMBER_SUFFIXES.len());
    for n in 0..=max_number {
        out.push(format!("{}{}", word, n));
    }
    for suffix in COMMON_NUMBER_SUFFIXES {
        out.push(format!("{}{}", word, suffix));
    }
    out
}

/// Leet-speak variants of a word, enumerating every combination of
/// substitutable characters until `max_variants` strings are produced.
///
/// Positions advance left-to-right, so the enumeration order is fixed and a
/// small cap yields the same prefix of variants on every call. The cap keeps
/// long words tractable: eight substitutable characters would otherwise
/// produce thousands of combinations.
pub fn leet_variants(word: &str, max_variants: usize) -> Vec<String> {
    if word.is_empty() || max_variants == 0 {
        return Vec::new();
    }

    // Option list per character position: the character itself first, then
    // its substitutions. Positions without substitutions stay fixed.
    let lower = word.to_lowercase();
    let slots: Vec<Vec<char>> = lower
        .chars()
        .map(|c| {
            let mut options = vec![c];
            if let Some((_, subs)) = LEET_MAP.iter().find(|(ch, _)| *ch == c) {
                options.extend(subs.iter().copied());
            }
            options
        })
        .collect();

    let mut variants = Vec::new();
    let mut indices = vec![0usize; slots.len()];

    // Mixed-radix counter over the option lists, leftmost position fastest.
    // The all-zero state is the unmodified word and is skipped; the identity
    // form is the builder's job.
    'enumerate: loop {
        let mut pos = 0;
        loop {
            if pos == indices.len() {
                break 'enumerate;
            }
            indices[pos] += 1;
            if indices[pos] < slots[pos].len() {
                break;
            }
            indices[pos] = 0;
            pos += 1;
        }

        let variant: String = indices.iter().zip(&slots).map(|(&i, s)| s[i]).collect();
        variants.push(variant);
        if variants.len() >= max_variants {
            break;
        }
    }

    variants
}

/// Case variants: lowercase, UPPERCASE, Capitalized, and an alternating form
/// for words of two or more characters. Duplicates (e.g. a single-letter
/// word) are left for the accumulator to collapse.
pub fn case_variants(word: &str) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }

    let mut variants = vec![word.to_lowercase(), word.to_uppercase(), capitalize(word)];

    if word.chars().count() >= 2 {
        let alternating: String = word
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if i % 2 == 0 {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();
        variants.push(alternating);
    }

    variants
}

/// Append and prepend each special character individually. No multi-symbol
/// combinations; one trailing "!" is the pattern policies actually produce.
pub fn special_char_variants(word: &str) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(SPECIAL_CHARS.len() * 2);
    for &ch in SPECIAL_CHARS {
        out.push(format!("{}{}", word, ch));
        out.push(format!("{}{}", ch, word));
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
