//! English stop word lists.
//!
//! Four named lists are available through [`stop_words`]. Every list also
//! contains the clitics the tokenizer splits off contractions (`n't`, `'s`, ...),
//! so that `don't` is removed as a whole.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// Clitic tokens produced by contraction splitting.
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m", "n’t", "’s", "’re", "’ve", "’ll", "’d", "’m"];

/// Common English function words.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "let", "me", "more", "most", "must", "my", "myself", "no", "nor", "not", "of", "off",
    "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shall", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
    "yourself", "yourselves",
];

/// Additional words for the comprehensive list; it is the union with the default list.
const COMPREHENSIVE_EXTRA: &[&str] = &[
    "able", "according", "accordingly", "across", "actually", "afterwards", "ago", "ahead",
    "almost", "alone", "along", "already", "also", "although", "always", "among", "amongst",
    "another", "anybody", "anyhow", "anyone", "anything", "anyway", "anywhere", "apart",
    "appear", "around", "aside", "ask", "asking", "away", "became", "become", "becomes",
    "becoming", "beforehand", "behind", "believe", "beside", "besides", "best", "better",
    "beyond", "brief", "came", "certain", "certainly", "clearly", "come", "comes", "consider",
    "considering", "contain", "containing", "contains", "corresponding", "course", "currently",
    "definitely", "described", "despite", "different", "done", "downwards", "each", "eg", "eight",
    "either", "else", "elsewhere", "enough", "entirely", "especially", "etc", "even", "ever",
    "every", "everybody", "everyone", "everything", "everywhere", "ex", "exactly", "example",
    "except", "far", "fifth", "first", "five", "followed", "following", "follows", "former",
    "formerly", "forth", "four", "furthermore", "get", "gets", "getting", "given", "gives", "go",
    "goes", "going", "gone", "got", "gotten", "greetings", "happens", "hardly", "hello", "help",
    "hence", "hereafter", "hereby", "herein", "hereupon", "hi", "hither", "hopefully", "however",
    "ie", "ignored", "immediate", "inasmuch", "inc", "indeed", "indicate", "indicated",
    "indicates", "inner", "insofar", "instead", "inward", "just", "keep", "keeps", "kept", "know",
    "known", "knows", "last", "lately", "later", "latter", "latterly", "least", "less", "lest",
    "like", "liked", "likely", "little", "look", "looking", "looks", "ltd", "mainly", "many",
    "may", "maybe", "mean", "meanwhile", "merely", "might", "moreover", "mostly", "much",
    "namely", "near", "nearly", "necessary", "need", "needs", "neither", "never", "nevertheless",
    "new", "next", "nine", "nobody", "non", "none", "noone", "normally", "nothing", "novel",
    "now", "nowhere", "obviously", "often", "oh", "ok", "okay", "old", "one", "ones", "onto",
    "others", "otherwise", "outside", "overall", "particular", "particularly", "per", "perhaps",
    "placed", "please", "plus", "possible", "presumably", "probably", "provides", "que", "quite",
    "rather", "really", "reasonably", "regarding", "regardless", "regards", "relatively",
    "respectively", "right", "said", "saw", "say", "saying", "says", "second", "secondly", "see",
    "seeing", "seem", "seemed", "seeming", "seems", "seen", "self", "selves", "sensible", "sent",
    "serious", "seriously", "seven", "several", "since", "six", "somebody", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhat", "somewhere", "soon", "sorry", "specified",
    "specify", "specifying", "still", "sub", "sup", "sure", "take", "taken", "tell", "tends",
    "th", "thank", "thanks", "thanx", "thats", "thence", "thereafter", "thereby", "therefore",
    "therein", "theres", "thereupon", "think", "third", "thorough", "thoroughly", "though",
    "three", "throughout", "thru", "thus", "together", "took", "toward", "towards", "tried",
    "tries", "truly", "try", "trying", "twice", "two", "un", "unfortunately", "unless",
    "unlikely", "unto", "upon", "us", "use", "used", "useful", "uses", "using", "usually",
    "value", "various", "via", "viz", "vs", "want", "wants", "way", "welcome", "well", "went",
    "whatever", "whence", "whenever", "whereafter", "whereas", "whereby", "wherein",
    "whereupon", "wherever", "whether", "whither", "whoever", "whole", "whose", "willing",
    "wish", "within", "without", "wonder", "yes", "yet", "zero",
];

/// The short list popularised by web search engines.
const GOOGLE_STOP_WORDS: &[&str] = &[
    "i", "a", "about", "an", "and", "are", "as", "at", "be", "by", "com", "de", "en", "for",
    "from", "how", "in", "is", "it", "la", "of", "on", "or", "that", "the", "this", "to", "was",
    "what", "when", "where", "who", "will", "with", "und", "www",
];

/// The MySQL full-text search stop word list (extension of the default list).
const MYSQL_EXTRA: &[&str] = &[
    "a's", "able", "across", "actually", "afterwards", "ain't", "allow", "allows", "almost",
    "alone", "along", "already", "also", "although", "always", "among", "amongst", "another",
    "anybody", "anyhow", "anyone", "anything", "anyway", "anyways", "anywhere", "apart",
    "appear", "appreciate", "appropriate", "aren't", "around", "aside", "ask", "asking",
    "associated", "available", "away", "awfully", "became", "become", "becomes", "becoming",
    "beforehand", "behind", "believe", "beside", "besides", "best", "better", "beyond", "brief",
    "c'mon", "c's", "came", "can't", "cant", "cause", "causes", "certain", "certainly",
    "changes", "clearly", "co", "com", "come", "comes", "concerning", "consequently",
    "consider", "considering", "contain", "containing", "contains", "corresponding", "couldn't",
    "course", "currently", "definitely", "described", "despite", "didn't", "different",
    "doesn't", "don't", "done", "downwards", "edu", "eg", "eight", "either", "else", "elsewhere",
    "enough", "entirely", "especially", "et", "etc", "even", "ever", "every", "everybody",
    "everyone", "everything", "everywhere", "ex", "exactly", "example", "except", "far",
    "fifth", "first", "five", "followed", "following", "follows", "former", "formerly", "forth",
    "four", "furthermore", "get", "gets", "getting", "given", "gives", "go", "goes", "going",
    "gone", "got", "gotten", "greetings", "hadn't", "happens", "hardly", "hasn't", "haven't",
    "he's", "hello", "help", "hence", "here's", "hereafter", "hereby", "herein", "hereupon",
    "hi", "hither", "hopefully", "howbeit", "however", "i'd", "i'll", "i'm", "i've", "ie",
    "ignored", "immediate", "inasmuch", "inc", "indeed", "indicate", "indicated", "indicates",
    "inner", "insofar", "instead", "inward", "isn't", "it'd", "it'll", "it's", "just", "keep",
    "keeps", "kept", "know", "known", "knows", "last", "lately", "later", "latter", "latterly",
    "least", "less", "lest", "let's", "like", "liked", "likely", "little", "look", "looking",
    "looks", "ltd", "mainly", "many", "may", "maybe", "mean", "meanwhile", "merely", "might",
    "moreover", "mostly", "much", "namely", "nd", "near", "nearly", "necessary", "need", "needs",
    "neither", "never", "nevertheless", "new", "next", "nine", "nobody", "non", "none", "noone",
    "normally", "nothing", "novel", "now", "nowhere", "obviously", "often", "oh", "ok", "okay",
    "old", "one", "ones", "onto", "others", "otherwise", "outside", "overall", "particular",
    "particularly", "per", "perhaps", "placed", "please", "plus", "possible", "presumably",
    "probably", "provides", "que", "quite", "qv", "rather", "rd", "re", "really", "reasonably",
    "regarding", "regardless", "regards", "relatively", "respectively", "right", "said", "saw",
    "say", "saying", "says", "second", "secondly", "see", "seeing", "seem", "seemed", "seeming",
    "seems", "seen", "self", "selves", "sensible", "sent", "serious", "seriously", "seven",
    "several", "shouldn't", "since", "six", "somebody", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhat", "somewhere", "soon", "sorry", "specified", "specify",
    "specifying", "still", "sub", "sup", "sure", "t's", "take", "taken", "tell", "tends", "th",
    "thank", "thanks", "thanx", "that's", "thats", "thence", "there's", "thereafter", "thereby",
    "therefore", "therein", "theres", "thereupon", "they'd", "they'll", "they're", "they've",
    "think", "third", "thorough", "thoroughly", "though", "three", "throughout", "thru", "thus",
    "together", "took", "toward", "towards", "tried", "tries", "truly", "try", "trying", "twice",
    "two", "un", "unfortunately", "unless", "unlikely", "unto", "upon", "us", "use", "used",
    "useful", "uses", "using", "usually", "value", "various", "via", "viz", "vs", "want",
    "wants", "wasn't", "way", "we'd", "we'll", "we're", "we've", "welcome", "well", "went",
    "weren't", "what's", "whatever", "whence", "whenever", "where's", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "whither", "who's", "whoever",
    "whole", "whose", "willing", "wish", "within", "without", "won't", "wonder", "wouldn't",
    "yes", "yet", "you'd", "you'll", "you're", "you've", "zero",
];

/// The built-in stop word lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopWordList {
    Default,
    Comprehensive,
    Google,
    MySql,
}

type WordSet = Arc<HashSet<String>>;

fn build(parts: &[&[&str]]) -> WordSet {
    Arc::new(
        parts
            .iter()
            .flat_map(|part| part.iter())
            .chain(CLITICS.iter())
            .map(|s| s.to_string())
            .collect(),
    )
}

static DEFAULT_SET: LazyLock<WordSet> = LazyLock::new(|| build(&[DEFAULT_STOP_WORDS]));
static COMPREHENSIVE_SET: LazyLock<WordSet> =
    LazyLock::new(|| build(&[DEFAULT_STOP_WORDS, COMPREHENSIVE_EXTRA]));
static GOOGLE_SET: LazyLock<WordSet> = LazyLock::new(|| build(&[GOOGLE_STOP_WORDS]));
static MYSQL_SET: LazyLock<WordSet> =
    LazyLock::new(|| build(&[DEFAULT_STOP_WORDS, MYSQL_EXTRA]));

/// The shared word set of a built-in list. Entries are lowercase.
pub fn stop_words(list: StopWordList) -> WordSet {
    match list {
        StopWordList::Default => Arc::clone(&DEFAULT_SET),
        StopWordList::Comprehensive => Arc::clone(&COMPREHENSIVE_SET),
        StopWordList::Google => Arc::clone(&GOOGLE_SET),
        StopWordList::MySql => Arc::clone(&MYSQL_SET),
    }
}
