//! Demonstration driver: builds a small tree, prints its traversal and
//! structure, removes a few keys, and runs membership queries.

use btree::BTree;

fn main() {
    // minimum degree t = 3: each node holds up to 5 keys
    let mut tree = BTree::new(3).expect("degree 3 is valid");

    let vals = [10, 20, 5, 6, 12, 30, 7, 17, 3, 4, 25, 27, 26];
    for v in vals {
        tree.insert(v);
    }

    println!("In-order traversal: {:?}", tree.traverse());
    println!("\nStructure:");
    tree.print_structure();

    println!("\nRemoving 6, 13, 7, 4:");
    tree.remove(&6);
    tree.remove(&13); // not present
    tree.remove(&7);
    tree.remove(&4);

    println!("Traversal after removals: {:?}", tree.traverse());
    println!("\nStructure after removals:");
    tree.print_structure();

    println!("\nLookups:");
    println!("contains 12? {}", tree.contains(&12));
    println!("contains 99? {}", tree.contains(&99));
}
