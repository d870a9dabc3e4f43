/// This crate is an FAQ matching engine using TF-IDF vectors and cosine similarity.
pub mod analyze;
pub mod dataset;
pub mod error;
pub mod retriever;

/// FAQ Index
/// The top-level struct of this crate. It converts a list of question/answer
/// pairs into TF-IDF vectors and answers free-text queries with the closest
/// entry's answer.
///
/// Internally, it holds:
/// - The indexed entries, in file order
/// - One sparse TF-IDF vector per entry
/// - The IDF table built from the indexed questions
/// - The confidence threshold a best match must strictly beat
///
/// `FaqIndex<N, E>` has the following generic parameters:
/// - `N`: Vector weight type (e.g., f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// The index is immutable once built; queries never mutate it.
///
/// # Examples
/// ```
/// use faq_retriever::{FaqEntry, FaqIndex};
///
/// let index: FaqIndex = FaqIndex::build(vec![
///     FaqEntry {
///         question: "How do I track my order?".to_string(),
///         answer: "Use the tracking link in your confirmation email.".to_string(),
///     },
///     FaqEntry {
///         question: "What is your return policy?".to_string(),
///         answer: "You can return items within 30 days.".to_string(),
///     },
///     FaqEntry {
///         question: "What payment methods do you accept?".to_string(),
///         answer: "We accept cards and PayPal.".to_string(),
///     },
/// ]);
///
/// let reply = index.reply("track my order").unwrap();
/// assert_eq!(reply.index, 0);
/// assert_eq!(reply.answer, "Use the tracking link in your confirmation email.");
///
/// assert!(index.reply("weather tomorrow").is_none());
/// ```
///
/// # Serialization
/// Supported. A built index round-trips through CBOR via `save_to` /
/// `load_from`, so startup can skip re-weighing a large corpus.
pub use retriever::FaqIndex;

/// FAQ Entry
/// One question/answer pair. Entries carry no id of their own; their
/// position in the indexed list is their identity, and `Reply::index`
/// reports it back.
pub use retriever::FaqEntry;

/// Query Replies
/// Data structures for query results.
/// - `Reply`: a confident answer borrowed from the index
/// - `Hit`: position and score of the best-scoring entry, before the
///   threshold is applied
/// - `DEFAULT_SCORE_THRESHOLD`: the score a best match must strictly beat
pub use retriever::rank::{Hit, Reply, DEFAULT_SCORE_THRESHOLD};

/// Corpus for IDF Calculation
/// Counts, for each feature, the number of entries whose question contains
/// it at least once. It does not store the questions themselves.
/// Used as the base data for IDF (Inverse Document Frequency) calculation.
pub use retriever::corpus::Corpus;

/// Term Frequency structure
/// A struct for counting feature occurrences within a single question or
/// query. Used as base data for TF (Term Frequency) calculation.
pub use retriever::term::TermFrequency;

/// TF-IDF Calculation Engine Trait
/// By implementing this trait, you can plug a different weighting scheme
/// into `FaqIndex<N, E>`. The default implementation, `DefaultTFIDFEngine`,
/// computes `idf = ln(entries / (df + 1))` and `weight = count * idf`.
/// `IDFTable` caches the per-feature IDF weights of a built corpus.
pub use retriever::tfidf::{DefaultTFIDFEngine, IDFTable, TFIDFEngine};

/// Sparse Feature Vector
/// Feature-to-weight map with cosine similarity. Absent features read as
/// zero, and a zero-norm side scores 0 rather than NaN.
pub use retriever::vector::FeatureVector;

/// Knowledge Base Loading
/// `read_faq_file` / `parse_faq` read the JSON dataset format, skipping
/// malformed elements and reporting how many were dropped via `FaqFile`.
pub use dataset::{parse_faq, read_faq_file, FaqFile};

/// Crate Errors
/// I/O-edge failures only. Retrieval itself never fails: a query with no
/// confident match is a normal `None`, not an error.
pub use error::{Error, Result};
