mod clipboard;
pub mod json_input;
pub mod search_bar;
pub mod tree_graph;
pub mod tree_visualizer;
