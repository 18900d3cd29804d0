pub mod copy_panel;
