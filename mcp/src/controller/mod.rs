pub(crate) mod meeting_controller;
