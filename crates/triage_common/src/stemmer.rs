//! Porter stemmer for English.
//!
//! Implements M.F. Porter, "An algorithm for suffix stripping" (1980),
//! steps 1a through 5b. Works on chars: anything that is not a vowel (or a
//! `y` following a consonant) is treated as a consonant, so digits and
//! punctuation pass through unchanged.

/// Reduce a single word to its Porter stem.
///
/// The word is folded to lowercase first. Words of two characters or fewer
/// are returned as-is after folding.
pub fn stem(word: &str) -> String {
    let chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    if chars.len() <= 2 {
        return chars.into_iter().collect();
    }

    let mut stemmer = Stemmer::new(chars);
    stemmer.step1ab();
    if stemmer.k > 0 {
        stemmer.step1c();
        stemmer.step2();
        stemmer.step3();
        stemmer.step4();
        stemmer.step5();
    }
    stemmer.into_stem()
}

/// Working buffer for one word.
struct Stemmer {
    b: Vec<char>,
    /// Index of the last char of the current word
    k: isize,
    /// Index of the last char before a matched suffix (-1 when the suffix is the whole word)
    j: isize,
}

impl Stemmer {
    fn new(chars: Vec<char>) -> Self {
        let k = chars.len() as isize - 1;
        Self { b: chars, k, j: k }
    }

    fn into_stem(mut self) -> String {
        self.b.truncate((self.k + 1) as usize);
        self.b.into_iter().collect()
    }

    fn at(&self, i: isize) -> char {
        self.b[i as usize]
    }

    fn is_consonant(&self, i: isize) -> bool {
        match self.at(i) {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Number of VC sequences in b[0..=j], the `m` of `[C](VC)^m[V]`.
    fn measure(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        loop {
            if i > self.j {
                return n;
            }
            if !self.is_consonant(i) {
                break;
            }
            i += 1;
        }
        i += 1;
        loop {
            loop {
                if i > self.j {
                    return n;
                }
                if self.is_consonant(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
            n += 1;
            loop {
                if i > self.j {
                    return n;
                }
                if !self.is_consonant(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..=self.j).any(|i| !self.is_consonant(i))
    }

    fn double_consonant(&self, i: isize) -> bool {
        i >= 1 && self.at(i) == self.at(i - 1) && self.is_consonant(i)
    }

    /// consonant-vowel-consonant ending at `i`, where the last consonant is not w, x or y
    fn cvc(&self, i: isize) -> bool {
        if i < 2 || !self.is_consonant(i) || self.is_consonant(i - 1) || !self.is_consonant(i - 2) {
            return false;
        }
        !matches!(self.at(i), 'w' | 'x' | 'y')
    }

    /// True if b[0..=k] ends with `suffix`; sets `j` to the char before it.
    fn ends(&mut self, suffix: &str) -> bool {
        let len = suffix.chars().count() as isize;
        if len > self.k + 1 {
            return false;
        }
        let start = (self.k + 1 - len) as usize;
        if !self.b[start..=self.k as usize].iter().copied().eq(suffix.chars()) {
            return false;
        }
        self.j = self.k - len;
        true
    }

    /// Replace b[j+1..=k] with `s`.
    fn set_to(&mut self, s: &str) {
        self.b.truncate((self.j + 1) as usize);
        self.b.extend(s.chars());
        self.k = self.b.len() as isize - 1;
    }

    fn replace_if_measured(&mut self, s: &str) {
        if self.measure() > 0 {
            self.set_to(s);
        }
    }

    /// First matching suffix wins, whether or not the measure allows the replacement.
    fn apply_rules(&mut self, rules: &[(&str, &str)]) {
        for (suffix, replacement) in rules {
            if self.ends(suffix) {
                self.replace_if_measured(replacement);
                return;
            }
        }
    }

    /// Plurals, -ed and -ing.
    fn step1ab(&mut self) {
        if self.at(self.k) == 's' {
            if self.ends("sses") {
                self.k -= 2;
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.at(self.k - 1) != 's' {
                self.k -= 1;
            }
        }

        if self.ends("eed") {
            if self.measure() > 0 {
                self.k -= 1;
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.k = self.j;
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_consonant(self.k) {
                self.k -= 1;
                if matches!(self.at(self.k), 'l' | 's' | 'z') {
                    self.k += 1;
                }
            } else if self.measure() == 1 && self.cvc(self.k) {
                self.set_to("e");
            }
        }
    }

    /// Terminal y to i when there is another vowel in the stem.
    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            let k = self.k as usize;
            self.b[k] = 'i';
        }
    }

    /// Double suffixes to single ones.
    fn step2(&mut self) {
        let rules: &[(&str, &str)] = match self.at(self.k - 1) {
            'a' => &[("ational", "ate"), ("tional", "tion")],
            'c' => &[("enci", "ence"), ("anci", "ance")],
            'e' => &[("izer", "ize")],
            'l' => &[
                ("abli", "able"),
                ("alli", "al"),
                ("entli", "ent"),
                ("eli", "e"),
                ("ousli", "ous"),
            ],
            'o' => &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")],
            's' => &[
                ("alism", "al"),
                ("iveness", "ive"),
                ("fulness", "ful"),
                ("ousness", "ous"),
            ],
            't' => &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")],
            _ => return,
        };
        self.apply_rules(rules);
    }

    /// -ic-, -full, -ness etc.
    fn step3(&mut self) {
        let rules: &[(&str, &str)] = match self.at(self.k) {
            'e' => &[("icate", "ic"), ("ative", ""), ("alize", "al")],
            'i' => &[("iciti", "ic")],
            'l' => &[("ical", "ic"), ("ful", "")],
            's' => &[("ness", "")],
            _ => return,
        };
        self.apply_rules(rules);
    }

    /// Strip -ant, -ence etc. in context `<c>vcvc<v>`.
    fn step4(&mut self) {
        let matched = match self.at(self.k - 1) {
            'o' => {
                (self.ends("ion") && self.j >= 0 && matches!(self.at(self.j), 's' | 't'))
                    || self.ends("ou")
            }
            c => step4_suffixes(c).iter().any(|suffix| self.ends(suffix)),
        };
        if matched && self.measure() > 1 {
            self.k = self.j;
        }
    }

    /// Final -e and -ll.
    fn step5(&mut self) {
        self.j = self.k;
        if self.at(self.k) == 'e' {
            let m = self.measure();
            if m > 1 || (m == 1 && !self.cvc(self.k - 1)) {
                self.k -= 1;
            }
        }
        if self.at(self.k) == 'l' && self.double_consonant(self.k) && self.measure() > 1 {
            self.k -= 1;
        }
    }
}

fn step4_suffixes(penultimate: char) -> &'static [&'static str] {
    match penultimate {
        'a' => &["al"],
        'c' => &["ance", "ence"],
        'e' => &["er"],
        'i' => &["ic"],
        'l' => &["able", "ible"],
        'n' => &["ant", "ement", "ment", "ent"],
        's' => &["ism"],
        't' => &["ate", "iti"],
        'u' => &["ous"],
        'v' => &["ive"],
        'z' => &["ize"],
        _ => &[],
    }
}
