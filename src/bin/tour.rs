//! A guided tour of fundamental data structures. Each section builds a small structure, prints
//! it and notes the cost of its main operations.

use std::collections::{HashMap, LinkedList, VecDeque};
use std::io::{self, Write};

use clap::{Parser, ValueEnum};

use dsa_tour::bst::Node;
use dsa_tour::trie::Trie;

/// Walk through arrays, lists, stacks, queues, maps, trees, graphs and tries.
#[derive(Parser, Debug)]
#[command(name = "tour", version, about)]
struct Args {
    /// Sections to show, in the given order. Shows every section when omitted.
    #[arg(short, long, value_enum)]
    section: Vec<Section>,

    /// Values for the BST section. The first one becomes the root.
    #[arg(long, num_args = 1.., default_values_t = [10, 5, 15, 12], allow_negative_numbers = true)]
    values: Vec<i32>,

    /// Words inserted into the trie.
    #[arg(long, num_args = 1.., default_values_t = ["go".to_string(), "golang".to_string()])]
    words: Vec<String>,

    /// Words looked up in the trie.
    #[arg(long, num_args = 1.., default_values_t = ["go".to_string(), "java".to_string()])]
    search: Vec<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Section {
    Arrays,
    Slices,
    LinkedList,
    Queue,
    Stack,
    HashMap,
    Bst,
    Graph,
    Trie,
}

impl Section {
    const ALL: [Section; 9] = [
        Section::Arrays,
        Section::Slices,
        Section::LinkedList,
        Section::Queue,
        Section::Stack,
        Section::HashMap,
        Section::Bst,
        Section::Graph,
        Section::Trie,
    ];

    fn title(self) -> &'static str {
        match self {
            Section::Arrays => "Arrays",
            Section::Slices => "Slices",
            Section::LinkedList => "Linked List",
            Section::Queue => "Queue",
            Section::Stack => "Stack",
            Section::HashMap => "HashMap",
            Section::Bst => "Binary Tree",
            Section::Graph => "Graph",
            Section::Trie => "Trie",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let sections = if args.section.is_empty() {
        Section::ALL.to_vec()
    } else {
        args.section.clone()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for section in sections {
        writeln!(out, "\n--- {} ---", section.title())?;
        match section {
            Section::Arrays => arrays(&mut out)?,
            Section::Slices => slices(&mut out)?,
            Section::LinkedList => linked_list(&mut out)?,
            Section::Queue => queue(&mut out)?,
            Section::Stack => stack(&mut out)?,
            Section::HashMap => hash_map(&mut out)?,
            Section::Bst => bst(&mut out, &args.values)?,
            Section::Graph => graph(&mut out)?,
            Section::Trie => trie(&mut out, &args.words, &args.search)?,
        }
    }

    Ok(())
}

fn arrays(out: &mut impl Write) -> io::Result<()> {
    // Fixed size, known at compile time.
    let arr: [i32; 5] = [10, 20, 30, 40, 50];
    writeln!(out, "Array: {arr:?}")?;
    writeln!(out, "Direct access arr[2]: {}", arr[2])?;
    writeln!(out, "Big-O: index access O(1)")
}

fn slices(out: &mut impl Write) -> io::Result<()> {
    let mut v = vec![1, 2, 3];
    v.extend([4, 5]);
    writeln!(out, "Vec: {v:?}")?;
    v.sort();
    writeln!(out, "Sorted: {v:?}")?;
    v.remove(1);
    writeln!(out, "After removing index 1: {v:?}")?;
    writeln!(
        out,
        "Big-O: push O(1) amortized, remove O(n), sort O(n log n)"
    )
}

fn linked_list(out: &mut impl Write) -> io::Result<()> {
    let mut list = LinkedList::new();
    list.push_back("A");
    list.push_back("B");
    list.push_front("Start");
    for item in &list {
        writeln!(out, "{item}")?;
    }
    writeln!(out, "Big-O: push/pop at either end O(1), search O(n)")
}

fn queue(out: &mut impl Write) -> io::Result<()> {
    let mut queue = VecDeque::from(["first"]);
    queue.push_back("second");
    if let Some(head) = queue.pop_front() {
        writeln!(out, "Dequeued: {head}")?;
    }
    writeln!(out, "Remaining queue: {queue:?}")?;
    writeln!(out, "Big-O: enqueue and dequeue O(1) with a ring buffer")
}

fn stack(out: &mut impl Write) -> io::Result<()> {
    let mut stack = vec![1, 2, 3];
    if let Some(top) = stack.pop() {
        writeln!(out, "Top of stack: {top}")?;
    }
    writeln!(out, "Remaining stack: {stack:?}")?;
    writeln!(out, "Big-O: push and pop O(1)")
}

fn hash_map(out: &mut impl Write) -> io::Result<()> {
    let mut map = HashMap::new();
    map.insert("go", 1);
    map.insert("java", 2);
    writeln!(out, "Value for key 'go': {:?}", map.get("go"))?;
    map.remove("java");
    writeln!(out, "HashMap after remove: {map:?}")?;
    writeln!(
        out,
        "Big-O: average get/insert/remove O(1), rare worst case O(n)"
    )
}

fn bst(out: &mut impl Write, values: &[i32]) -> io::Result<()> {
    let Some((first, rest)) = values.split_first() else {
        return writeln!(out, "No values given");
    };

    let mut root = Node::new(*first);
    for v in rest {
        root.insert(*v);
    }

    writeln!(out, "Values in order:")?;
    let mut result = Ok(());
    root.for_each_in_order(|v| {
        if result.is_ok() {
            result = writeln!(out, "{v}");
        }
    });
    result?;
    writeln!(out, "Height: {}", root.height())?;

    // Same values inserted in ascending order: every node goes right.
    let mut sorted = values.to_vec();
    sorted.sort();
    let mut degenerate = Node::new(sorted[0]);
    for v in &sorted[1..] {
        degenerate.insert(*v);
    }
    writeln!(out, "Height when inserted sorted: {}", degenerate.height())?;
    writeln!(
        out,
        "Big-O: O(log n) on average, O(n) worst case (degenerate list)"
    )
}

fn graph(out: &mut impl Write) -> io::Result<()> {
    let graph: HashMap<&str, Vec<&str>> = HashMap::from([
        ("A", vec!["B", "C"]),
        ("B", vec!["D"]),
        ("C", vec!["E"]),
    ]);
    writeln!(out, "Neighbours of A: {:?}", graph["A"])?;
    writeln!(
        out,
        "Big-O: neighbour lookup O(1) average, edge check O(degree)"
    )
}

fn trie(out: &mut impl Write, words: &[String], search: &[String]) -> io::Result<()> {
    let trie: Trie = words.iter().map(String::as_str).collect();
    for word in search {
        writeln!(out, "Contains '{word}'? {}", trie.search(word))?;
    }
    writeln!(out, "Nodes: {}", trie.node_count())?;
    writeln!(out, "Big-O: insert/search O(m), m = word length")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bst_prints_sorted_values() {
        let text = render(|out| bst(out, &[10, 5, 15, 12]));

        assert!(text.contains("5\n10\n12\n15\n"));
        assert!(text.contains("Height: 3"));
        assert!(text.contains("Height when inserted sorted: 4"));
    }

    #[test]
    fn bst_without_values() {
        assert_eq!(render(|out| bst(out, &[])), "No values given\n");
    }

    #[test]
    fn trie_reports_membership() {
        let words = ["go".to_string(), "golang".to_string()];
        let search = ["go".to_string(), "java".to_string()];
        let text = render(|out| trie(out, &words, &search));

        assert!(text.contains("Contains 'go'? true"));
        assert!(text.contains("Contains 'java'? false"));
    }

    #[test]
    fn args_default_to_every_section() {
        let args = Args::parse_from(["tour"]);

        assert!(args.section.is_empty());
        assert_eq!(args.values, [10, 5, 15, 12]);
        assert_eq!(args.words, ["go", "golang"]);
    }

    #[test]
    fn args_pick_sections() {
        let args = Args::parse_from(["tour", "-s", "bst", "-s", "trie", "--values", "3", "-1"]);

        assert_eq!(args.section, [Section::Bst, Section::Trie]);
        assert_eq!(args.values, [3, -1]);
    }
}
