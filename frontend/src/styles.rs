pub const CONTAINER_LG: &str = "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] p-6 border border-gray-100 dark:border-gray-700";
pub const TEXT_H1: &str = "text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_BODY: &str = "text-gray-700 dark:text-gray-300";
pub const INPUT: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-lg text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-green-700";

pub const BUTTON_ADD: &str = "ml-2 shrink-0 w-1/5 h-[45px] rounded-lg font-medium text-white bg-green-800 hover:bg-white hover:text-green-800 border border-green-800 transition-colors duration-200";
pub const BUTTON_SHARE: &str = "relative w-full h-[45px] rounded-lg text-xl font-medium text-white bg-red-500 hover:bg-white hover:text-red-500 border border-red-500 transition-colors duration-200";
pub const BUTTON_RESET: &str = "w-full h-[45px] rounded-lg text-xl font-medium text-white bg-blue-500 hover:bg-white hover:text-blue-500 border border-blue-500 transition-colors duration-200";
pub const BUTTON_DELETE: &str = "p-2 rounded-full text-gray-500 hover:text-red-600 hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors duration-200 disabled:opacity-40 disabled:cursor-not-allowed";

pub const OPTION_ROW: &str = "flex items-center justify-between py-2 px-1 border-b border-gray-100 dark:border-gray-700 last:border-b-0";
pub const OPTION_CHIP: &str = "inline-flex items-center justify-center min-w-[2rem] h-8 px-2 mr-3 rounded-full bg-gray-200 dark:bg-gray-700 text-sm font-medium text-gray-800 dark:text-gray-200";

pub const MODAL_BACKDROP: &str = "fixed inset-0 z-40 flex items-center justify-center bg-black/50";
pub const MODAL_BOX: &str = "relative flex flex-col items-center justify-center bg-white dark:bg-gray-800 rounded-xl shadow-2xl w-[90%] sm:w-2/5 h-[35%] max-w-[100vw] overflow-y-auto p-6 text-center";
pub const MODAL_CLOSE: &str = "absolute right-2 top-2 p-2 text-2xl leading-none text-gray-500 hover:text-gray-800 dark:hover:text-white";

pub const TOAST: &str = "fixed bottom-6 left-6 z-50 max-w-md flex items-center px-4 py-3 rounded-lg shadow-lg text-white";
pub const TOAST_SUCCESS: &str = "bg-green-600";
pub const TOAST_ERROR: &str = "bg-red-600";
