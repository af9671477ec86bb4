/// Face of the Helvetica family a cell is drawn with.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Default)]
pub enum Style {
   #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}
