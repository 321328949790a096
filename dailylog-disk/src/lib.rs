// dailylog-disk - local filesystem storage for dailylog readers
//
// Register a LocalDisk under a name in a ReaderDesc and readers can bind
// files below its root directory.

mod local;

pub use local::LocalDisk;
