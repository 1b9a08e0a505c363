//! Reusable UI components shared by the editor and viewer pages.

pub mod room_panel;
