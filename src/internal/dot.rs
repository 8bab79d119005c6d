//! The `dot` module contains the conversion from a language dictionary to a graphviz dot format.
//! The functions in this module are used for testing and debugging purposes.

use std::io::Write;

use dot_writer::{Attributes, DotWriter, RankDirection, Scope};

use crate::{LanguageDictionary, Trie};

/// Render the keyword and datatype tries of a dictionary to a graphviz dot format.
/// Each trie is drawn as a cluster of its own. Nodes that terminate a word are drawn red.
pub(crate) fn dictionary_render<W: Write>(dictionary: &LanguageDictionary, output: &mut W) {
    let mut writer = DotWriter::from(output);
    writer.set_pretty_print(true);
    let mut digraph = writer.digraph();
    digraph
        .set_label(dictionary.name())
        .set_rank_direction(RankDirection::LeftRight);
    trie_render(&mut digraph, "keywords", "k", dictionary.keywords());
    trie_render(&mut digraph, "datatypes", "d", dictionary.datatypes());
}

fn trie_render(digraph: &mut Scope, label: &str, prefix: &str, trie: &Trie) {
    let mut cluster = digraph.cluster();
    cluster.set_label(&format!("{} ({})", label, trie.len()));
    for node in 0..trie.node_count() {
        let mut dot_node = cluster.node_named(format!("{}{}", prefix, node));
        dot_node.set_label(&node.to_string());
        if node == 0 {
            dot_node
                .set_shape(dot_writer::Shape::Circle)
                .set_color(dot_writer::Color::Blue)
                .set_pen_width(3.0);
        }
        if trie.is_terminal(node) {
            dot_node
                .set_color(dot_writer::Color::Red)
                .set_pen_width(3.0);
        }
    }
    for node in 0..trie.node_count() {
        for (byte, child) in trie.edges(node) {
            cluster
                .edge(format!("{}{}", prefix, node), format!("{}{}", prefix, child))
                .attributes()
                .set_label(&(byte as char).escape_default().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LanguageDefinition;

    #[test]
    fn test_dictionary_render() {
        let definition = LanguageDefinition::new("tiny", &["if", "in"], &["int"]);
        let dictionary = LanguageDictionary::try_from(&definition).unwrap();
        let mut output = Vec::new();
        dictionary_render(&dictionary, &mut output);
        let dot = String::from_utf8(output).unwrap();
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("keywords (2)"));
        assert!(dot.contains("datatypes (1)"));
        assert!(dot.contains("k0 -> k1"));
        assert!(dot.contains("d0 -> d1"));
    }
}
