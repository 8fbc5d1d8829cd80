pub const CONTAINER: &str = "min-h-screen bg-[#0f1724] text-white w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const NAV: &str = "fixed top-0 left-0 z-50 w-full bg-[#1a2332]/80 backdrop-blur-md border-b border-[#2a3343]";
pub const NAV_CONTENT: &str = "h-16 px-4 sm:px-6 lg:px-8 flex items-center justify-between";
pub const NAV_BRAND: &str = "text-xl font-bold text-[#4cc9f0]";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const NAV_LINK: &str = "px-3 py-2 text-sm font-medium text-gray-300 hover:text-[#4cc9f0] transition-colors duration-200";
pub const CARD: &str = "bg-[#1a2332] border border-[#2a3343] rounded-lg shadow-lg p-6";
pub const GAME_CARD: &str = "bg-[#1a2332] border border-[#2a3343] p-8 pb-6 rounded-lg shadow-lg max-w-md w-full mx-auto";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-black bg-[#4cc9f0] hover:bg-[#4cc9f0]/80 transition-all duration-300";
pub const BUTTON_SPIN: &str = "px-4 py-2 rounded-lg font-medium bg-[#4cc9f0] hover:bg-[#4cc9f0]/80 text-black disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_END: &str = "px-4 py-2 rounded-lg font-medium bg-[#2a3343] hover:bg-[#3a4353] text-white border border-[#3a4353]";
pub const RESULT_OVERLAY: &str = "bg-[#1a2332]/90 p-4 rounded-lg text-center";
pub const CHART_PLACEHOLDER: &str = "h-[300px] w-full bg-[#1a2332]/50 animate-pulse rounded-md";
pub const TOAST: &str = "fixed bottom-6 right-6 z-50 bg-[#1a2332] border border-[#4cc9f0] rounded-lg shadow-xl px-4 py-3";
pub const TEXT_H1: &str = "text-3xl font-bold text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-white";
pub const TEXT_BODY: &str = "text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-400";
pub const TEXT_LINK: &str = "text-[#4cc9f0] hover:underline";
