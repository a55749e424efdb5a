pub mod html_utils;
