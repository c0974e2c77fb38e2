pub mod courseware;
