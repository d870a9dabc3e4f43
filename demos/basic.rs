use faq_retriever::{FaqEntry, FaqIndex};

fn main() {
    // build the knowledge base
    let entries = vec![
        FaqEntry {
            question: "How do I track my order?".to_string(),
            answer: "Use the tracking link in your confirmation email.".to_string(),
        },
        FaqEntry {
            question: "What is your return policy?".to_string(),
            answer: "You can return items within 30 days.".to_string(),
        },
        FaqEntry {
            question: "What payment methods do you accept?".to_string(),
            answer: "We accept cards and PayPal.".to_string(),
        },
        FaqEntry {
            question: "How long does shipping take?".to_string(),
            answer: "Standard shipping takes 3 to 5 business days.".to_string(),
        },
    ];

    // index it once
    let index: FaqIndex = FaqIndex::build(entries);
    println!("indexed {} entries", index.entry_num());

    // ask some questions
    for query in [
        "track my order",
        "can i return an item",
        "which payment methods can i use",
        "weather tomorrow",
    ] {
        match index.reply(query) {
            Some(reply) => println!("{:?} -> {} (score {:.4})", query, reply.answer, reply.score),
            None => println!("{:?} -> no confident match", query),
        }
    }
}
