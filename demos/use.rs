use avl_tree::Tree;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    // Rotations are logged at trace level
    let _ = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let mut tree = Tree::new();
    for key in [10, 20, 30, 40, 50, 25] {
        if let Err(err) = tree.add(key) {
            eprintln!("{err}");
        }
    }
    println!("In-order traversal: {:?}", tree.in_order());
    println!("Pre-order traversal: {:?}", tree.pre_order());
    println!("Post-order traversal: {:?}", tree.post_order());
    print!("{tree}");

    let mut tree = Tree::new();
    for key in [50, 30, 70, 20, 40, 60, 80, 40] {
        if let Err(err) = tree.add(key) {
            eprintln!("{err}");
        }
    }
    assert!(tree.search(&40).is_some());
    assert!(tree.search(&100).is_none());
    println!("Min: {:?}, max: {:?}", tree.get_min(), tree.get_max());

    tree.remove(&30);
    tree.remove(&100);
    println!("After removing 30: {tree:?}");
    println!(
        "Height: {}, size: {}, balanced: {}",
        tree.tree_height(),
        tree.size(),
        tree.is_balanced()
    );
    print!("{}", tree.visualize());

    let empty = Tree::<i32>::new();
    println!("Empty tree min: {:?}, max: {:?}", empty.get_min(), empty.get_max());
}
