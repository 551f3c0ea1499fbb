use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct TrieNode {
    final_state: bool,
    child_nodes: HashMap<char, TrieNode>,
}

impl TrieNode {
    pub fn has_childs(&self) -> bool {
        !self.child_nodes.is_empty()
    }

    pub fn exist<C: Iterator<Item = char>>(&self, chars: C) -> bool {
        let mut current_node = self;
        for c in chars {
            match current_node.child_nodes.get(&c) {
                Some(node) => current_node = node,
                None => return false,
            }
        }
        current_node.final_state
    }

    /// Returns true when a new entry was registered.
    pub fn insert<C: Iterator<Item = char>>(&mut self, chars: C) -> bool {
        let mut current_node = self;
        for c in chars {
            current_node = current_node.child_nodes.entry(c).or_default();
        }
        let added = !current_node.final_state;
        current_node.final_state = true;
        added
    }

    /// Unmarks the entry and prunes branches left without entries.
    /// Returns true when an entry was removed.
    pub fn delete<C: Iterator<Item = char>>(&mut self, mut chars: C) -> bool {
        match chars.next() {
            None => {
                let removed = self.final_state;
                self.final_state = false;
                removed
            }
            Some(c) => {
                let Some(child) = self.child_nodes.get_mut(&c) else {
                    return false;
                };
                let removed = child.delete(chars);
                if !child.final_state && !child.has_childs() {
                    self.child_nodes.remove(&c);
                }
                removed
            }
        }
    }

    // length of the longest entry below this node
    pub fn depth(&self) -> usize {
        self.child_nodes
            .values()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn insert<C: Iterator<Item = char>>(&mut self, chars: C) -> bool {
        let added = self.root.insert(chars);
        if added {
            self.len += 1;
        }
        added
    }

    pub fn delete<C: Iterator<Item = char>>(&mut self, chars: C) -> bool {
        let removed = self.root.delete(chars);
        if removed {
            self.len -= 1;
        }
        removed
    }

    pub fn exist<C: Iterator<Item = char>>(&self, chars: C) -> bool {
        self.root.exist(chars)
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.root = TrieNode::default();
        self.len = 0;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trie_exist() {
        let mut trie = Trie::default();
        trie.insert("ทดสอบ".chars());
        trie.insert("ทด".chars());
        trie.insert("ยังไง".chars());
        trie.insert("Back".chars());
        trie.insert("Background".chars());

        assert!(trie.exist("ทด".chars()));
        assert!(trie.exist("ทดสอบ".chars()));
        assert!(!trie.exist("ทดส".chars()));
        assert!(!trie.exist("ยัง".chars()));
        assert!(trie.exist("Background".chars()));
        assert!(!trie.exist("Backgrounds".chars()));
        assert_eq!(5, trie.len());
    }

    #[test]
    fn trie_insert_prefix_after_longer_word() {
        let mut trie = Trie::default();
        assert!(trie.insert("ยังไง".chars()));
        assert!(trie.insert("ยัง".chars()));
        assert!(!trie.insert("ยัง".chars()));
        assert!(trie.exist("ยัง".chars()));
        assert_eq!(2, trie.len());
    }

    #[test]
    fn trie_delete_and_depth() {
        let mut trie = Trie::default();
        trie.insert("ว่า".chars());
        trie.insert("ยังไง".chars());
        assert_eq!(5, trie.depth());

        assert!(trie.delete("ยังไง".chars()));
        assert!(!trie.delete("ยังไง".chars()));
        assert!(!trie.exist("ยังไง".chars()));
        assert_eq!(3, trie.depth());
        assert_eq!(1, trie.len());

        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(0, trie.depth());
    }

    #[test]
    fn trie_delete_keeps_shared_prefix() {
        let mut trie = Trie::default();
        trie.insert("ทด".chars());
        trie.insert("ทดสอบ".chars());
        trie.delete("ทดสอบ".chars());
        assert!(trie.exist("ทด".chars()));
        assert_eq!(2, trie.depth());
    }
}
