//! Word-sequence generator built on a hand-wired network.
//!
//! Every n-gram of the input text becomes one AND node in layer 1 that feeds
//! an OR node for the following word in layer 2. Generation feeds the last
//! few words back in and samples among the strongest outputs.
//!
//! Run with:
//!   cargo run --example wordgen -- input.txt [words-per-context] [steps]

use std::collections::{HashMap, VecDeque};

use conduct_nn::{NetError, Network, NodeAddr, Params};
use log::info;
use rand::Rng;

/// AND gate: a pass-through link from every input of the pattern.
const AND_INPUT: Params = Params { k: 1.0, w: 1.0, c: 0.0 };
/// OR/negation stage used between the pattern node and its word.
const NEGATE: Params = Params { k: 0.0, w: 1.0, c: 0.0 };

struct Text {
    vocab: Vec<String>,
    seq: Vec<usize>,
}

impl Text {
    /// Lower-cases `raw` and splits it into words of ASCII letters; periods
    /// end a word and are dropped.
    fn parse(raw: &str) -> Text {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut vocab = Vec::new();
        let mut seq = Vec::new();

        let cleaned: String = raw
            .chars()
            .map(|ch| if ch.is_ascii_alphabetic() || ch == '.' { ch.to_ascii_lowercase() } else { ' ' })
            .collect();

        for word in cleaned.split_whitespace() {
            let word = word.trim_end_matches('.');
            if word.is_empty() {
                continue;
            }
            let id = *index.entry(word.to_string()).or_insert_with(|| {
                vocab.push(word.to_string());
                vocab.len() - 1
            });
            seq.push(id);
        }
        Text { vocab, seq }
    }
}

struct WordNet {
    net: Network,
    text: Text,
    context: usize,
}

impl WordNet {
    /// Input layer holds one slot per (context position, word); the output
    /// layer one node per word. Layers 1 and 2 are filled by patterns.
    fn build(text: Text, context: usize) -> Result<WordNet, NetError> {
        // one extra slot per position reserved for punctuation
        let width = text.vocab.len() + 1;
        let mut net = Network::uniform(&[width * context, 0, 0, width], NEGATE);
        for i in 0..width {
            let or = net.push_node(2)?;
            net.connect(or, NodeAddr::new(3, i), NEGATE)?;
        }
        Ok(WordNet { net, text, context })
    }

    fn width(&self) -> usize {
        self.text.vocab.len() + 1
    }

    /// AND over `inputs` feeding the OR node of `output`.
    fn add_logic_pattern(&mut self, inputs: &[usize], output: usize) -> Result<(), NetError> {
        let and = self.net.push_node(1)?;
        self.net.connect(and, NodeAddr::new(2, output), NEGATE)?;
        for &i in inputs {
            self.net.connect(NodeAddr::new(0, i), and, AND_INPUT)?;
        }
        Ok(())
    }

    /// Pattern for the word that follows `seq[start..start + context]`.
    fn add_word_pattern(&mut self, start: usize) -> Result<(), NetError> {
        let width = self.width();
        let next = self.text.seq[start + self.context];
        let inputs: Vec<usize> = (0..self.context)
            .map(|i| i * width + self.text.seq[start + i])
            .collect();
        self.add_logic_pattern(&inputs, next)
    }

    /// Right-aligns `recent` in the input slots and runs the network.
    fn feed(&mut self, recent: &VecDeque<usize>) {
        let width = self.width();
        let mut input = vec![0.0; width * self.context];
        let offset = self.context - recent.len();
        for (pos, &word) in recent.iter().enumerate() {
            input[(offset + pos) * width + word] = 1.0;
        }
        self.net.run(&input);
    }

    /// Picks one of the three strongest words, weighted by signal.
    fn pick<R: Rng>(&self, rng: &mut R) -> usize {
        let output = self.net.output();
        let mut ranked: Vec<(usize, f64)> = output[..self.text.vocab.len()].iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(3);

        let total: f64 = ranked.iter().map(|(_, s)| s).sum();
        if ranked.len() < 3 || total <= 0.0 {
            return rng.gen_range(0..self.text.vocab.len());
        }
        let mut roll = rng.gen::<f64>() * total;
        for &(word, signal) in &ranked {
            if roll < signal {
                return word;
            }
            roll -= signal;
        }
        ranked[0].0
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "input.txt".to_string());
    let context: usize = args.next().map(|a| a.parse()).transpose()?.unwrap_or(3);
    let steps: usize = args.next().map(|a| a.parse()).transpose()?.unwrap_or(50);

    let text = Text::parse(&std::fs::read_to_string(&path)?);
    if context == 0 || text.seq.len() <= context + 1 {
        return Err(format!("{path} needs more than {} words", context + 1).into());
    }

    let patterns = text.seq.len() - context - 1;
    let mut words = WordNet::build(text, context)?;
    for start in 0..patterns {
        words.add_word_pattern(start)?;
    }
    info!(
        "{} words in vocabulary, {} patterns, {} nodes",
        words.text.vocab.len(),
        patterns,
        words.net.node_count()
    );

    let mut rng = rand::thread_rng();
    let mut recent: VecDeque<usize> = words.text.seq[..context].iter().copied().collect();
    let mut line = Vec::with_capacity(steps);

    for _ in 0..steps {
        let last = *recent.back().unwrap_or(&0);
        line.push(words.text.vocab[last].clone());
        if recent.len() > context {
            recent.pop_front();
        }
        words.feed(&recent);

        let mut word = words.pick(&mut rng);
        if word == last {
            word = rng.gen_range(0..words.text.vocab.len());
            line.push("!".to_string());
        }
        recent.push_back(word);
    }

    println!("{}", line.join(" "));
    Ok(())
}
