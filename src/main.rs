use std::{env, io::{self, Write}, time::Instant};

use faq_retriever::{read_faq_file, FaqIndex};

// Default knowledge base location, relative to the working directory
const DEFAULT_DATA_PATH: &str = "data/faq.json";
// Reply when no entry scores above the threshold
const NO_MATCH_REPLY: &str = "Sorry, I didn't understand that.";

fn main() {
    let program_start = Instant::now();
    // ---- CLI flags ----
    // --data PATH        : FAQ JSON file (default: data/faq.json)
    // --index PATH       : load a prebuilt index snapshot instead of --data
    // --save-index PATH  : write the built index as a snapshot, then keep going
    // --threshold X      : override the confidence threshold (default 0.01)
    // --query "TEXT"     : answer one query and exit (no chat loop)
    // e.g.)  faq-retriever --query "track my order"
    //        faq-retriever --data data/faq.json --save-index faq.idx

    let mut args = env::args().skip(1);
    let mut data_path = String::from(DEFAULT_DATA_PATH);
    let mut index_path_opt: Option<String> = None;
    let mut save_path_opt: Option<String> = None;
    let mut threshold_opt: Option<f64> = None;
    let mut query_opt: Option<String> = None;
    while let Some(a) = args.next() {
        match a.as_str() {
            "--data" => {
                if let Some(v) = args.next() { data_path = v; } else { eprintln!("[error] --data requires a path"); return; }
            }
            "--index" => {
                if let Some(v) = args.next() { index_path_opt = Some(v); } else { eprintln!("[error] --index requires a path"); return; }
            }
            "--save-index" => {
                if let Some(v) = args.next() { save_path_opt = Some(v); } else { eprintln!("[error] --save-index requires a path"); return; }
            }
            "--threshold" => {
                if let Some(v) = args.next() { match v.parse::<f64>() { Ok(t) if t.is_finite() => threshold_opt = Some(t), _ => { eprintln!("[error] --threshold needs a finite number"); return; } } } else { eprintln!("[error] --threshold requires a number"); return; }
            }
            "--query" => {
                if let Some(v) = args.next() { query_opt = Some(v); } else { eprintln!("[error] --query requires a string"); return; }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            other => {
                // First positional arg doubles as the query
                if query_opt.is_none() { query_opt = Some(other.to_string()); } else { eprintln!("[warn] extra arg ignored: {}", other); }
            }
        }
    }

    // ---- Index setup ----
    let setup_start = Instant::now();
    let mut index: FaqIndex = if let Some(path) = index_path_opt {
        match FaqIndex::load_from(&path) {
            Ok(index) => { eprintln!("[info] loaded index snapshot from {}", path); index }
            Err(e) => { eprintln!("[error] failed to load index snapshot: {}", e); return; }
        }
    } else {
        let file = match read_faq_file(&data_path) {
            Ok(file) => file,
            Err(e) => { eprintln!("[error] failed to load FAQ data: {}", e); return; }
        };
        if file.skipped > 0 { eprintln!("[warn] skipped {} malformed entries", file.skipped); }
        eprintln!("[info] loaded {} QA pairs from {}", file.entries.len(), data_path);
        FaqIndex::build(file.entries)
    };
    if let Some(t) = threshold_opt { index = index.with_threshold(t); }
    eprintln!("[time] index_ready={:.2}ms", setup_start.elapsed().as_secs_f64() * 1000.0);

    if let Some(path) = save_path_opt {
        match index.save_to(&path) {
            Ok(()) => eprintln!("[info] saved index snapshot to {}", path),
            Err(e) => { eprintln!("[error] failed to save index snapshot: {}", e); return; }
        }
    }
    if index.is_empty() {
        eprintln!("[warn] empty knowledge base, every query gets the fallback reply");
    }

    // ---- Mode: --query answers once, otherwise chat loop ----
    if let Some(text) = query_opt {
        run_single_query(&index, &text);
    } else {
        run_chat(&index);
    }

    eprintln!("[time] program_total={:.2}ms", program_start.elapsed().as_secs_f64() * 1000.0);
}

fn print_usage() {
    eprintln!("Usage: faq-retriever [--data PATH] [--index PATH] [--save-index PATH] [--threshold X] [--query \"TEXT\"]");
    eprintln!("If --query is omitted, an interactive chat loop starts (type 'exit' to quit).");
}

fn run_single_query(index: &FaqIndex, text: &str) {
    let t0 = Instant::now();
    match index.reply(text) {
        Some(reply) => {
            eprintln!("[info] matched entry {} (score {:.4})", reply.index, reply.score);
            println!("{}", reply.answer);
        }
        None => {
            eprintln!("[info] no confident match");
            println!("{}", NO_MATCH_REPLY);
        }
    }
    eprintln!("[time] query={:.2}ms", t0.elapsed().as_secs_f64() * 1000.0);
}

fn run_chat(index: &FaqIndex) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("FAQ chat (type 'exit' to quit)");
    loop {
        print!("You: ");
        let _ = stdout.flush();
        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => { eprintln!("[info] bye"); break; }
            Ok(_) => {}
            Err(e) => { eprintln!("[error] read error: {}", e); break; }
        }
        let trimmed = line.trim();
        // Blank input re-prompts rather than quits
        if trimmed.is_empty() { continue; }
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            eprintln!("[info] bye");
            break;
        }
        match index.reply(trimmed) {
            Some(reply) => println!("Bot: {}", reply.answer),
            None => println!("Bot: {}", NO_MATCH_REPLY),
        }
    }
}
