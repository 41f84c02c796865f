//! Amharic function words removed before stemming.

/// Whole-word stop-words, matched verbatim.
#[rustfmt::skip]
pub const STOP_WORDS: &[&str] = &[
    "ስለሚሆን", "እና", "በመሆኑም", "ሁሉ", "ሆነ", "ሌላ",
    "ልክ", "ስለ", "በቀር", "ብቻ", "ና", "አንዳች",
    "አንድ", "እንደ", "እንጂ", "ያህል", "ይልቅ", "ወደ",
    "እኔ", "የእኔ", "ራሴ", "እኛ", "የእኛ", "እራሳችን",
    "አንቺ", "የእርስዎ", "ራስህ", "ራሳችሁ", "እሱ", "እሱን",
    "የእሱ", "ራሱ", "እርሷ", "የእሷ", "ራሷ", "እነሱ",
    "እነሱን", "የእነሱ", "እራሳቸው", "ምንድን", "የትኛው", "ማንን",
    "ይህ", "እነዚያ", "ነኝ", "ነው", "ናቸው", "ነበር",
    "ነበሩ", "ሁን", "መሆን", "አለኝ", "አለው", "ነበረ",
    "መኖር", "ያደርጋል", "አደረገው", "መሥራት", "ግን", "ከሆነ",
    "ወይም", "ምክንያቱም", "እስከ", "ጋር", "ላይ", "መካከል",
    "በኩል", "ወቅት", "በኋላ", "ከላይ", "በርቷል", "ጠፍቷል",
    "በላይ", "ስር", "ከዚያ", "አንዴ", "እዚህ", "እዚያ",
    "መቼ", "የት", "እንዴት", "ሁሉም", "ሁለቱም", "እያንዳንዱ",
    "ጥቂቶች", "በጣም", "አይ", "አይደለም", "የራስ", "ተመሳሳይ",
    "ስለዚህ", "እኔም", "ይችላል", "ይሆናል", "በቃ", "አሁን",
    "መጣ", "ሄደ", "ከዚህ", "ወይንም", "አሁኑኑ", "ሌላም",
    "እሷ", "የኔ", "እራሴ", "ጭምር", "አንተ", "እናንተ",
    "ያንተ", "ያንቺ", "የናንተ", "ራስህን", "ራስሽን", "ራሳችሁን",
    "ኋላ", "በሰሞኑ", "አሉ", "ሁኔታ", "አስታውቀዋል", "በውስጥ",
    "አስታውሰዋል", "ሆኑ", "ባጣም", "እስካሁን", "ሆኖም", "በተለይ",
    "አሳሰበ", "ሁል", "በተመለከተ", "አሳስበዋል", "በተመሳሳይ", "አስፈላጊ",
    "የተለያየ", "አስገነዘቡ", "ሌሎች", "የተለያዩ", "አስገንዝበዋል", "ልዩ",
    "ተባለ", "አብራርተዋል", "መሆኑ", "ተገለጸ", "አስረድተዋል", "ተገልጿል",
    "ማለቱ", "ተጨማሪ", "እባክህ", "የሚገኝ", "ተከናወነ", "እባክሽ",
    "ማድረግ", "ችግር", "አንጻር", "ማን", "ትናንት", "እስኪደርስ",
    "ነበረች", "እንኳ", "ሰሞኑን", "እንኳን", "ሲሆን", "እዚሁ",
    "ሲል", "እንደገለጹት", "አለ", "እንደተናገሩት", "ቢሆን", "ነገር",
    "እንዳስረዱት", "ብለዋል", "ነገሮች", "እንደገና", "ብዙ", "ናት",
    "ቦታ", "እንዲሁም", "በርካታ", "ማለት", "የሚሆኑት", "ስለማናቸውም",
    "ውስጥ", "ይሆናሉ", "ሲባል", "ከሆነው", "ስለዚሁ", "ከአንድ",
    "ያልሆነ", "ሳለ", "የነበረውን", "ከአንዳንድ", "በማናቸውም", "በሙሉ",
    "የሆነው", "ያሉ", "በእነዚሁ", "ወር", "መሆናቸው", "ከሌሎች",
    "በዋና", "አንዲት", "በማቀድ", "ለሌሎች", "በሆኑ", "ቢሆንም",
    "ጊዜና", "ይሆኑበታል", "በሆነ", "አንዱ", "ለዚህ", "ለሆነው",
    "ለነዚህ", "የሌላውን", "ሶስተኛ", "አንዳንድ", "ለማንኛውም", "የሆነ",
    "ከሁለት", "የነገሩ", "ሰኣት", "አንደኛ", "እንዲሆን", "እንደነዚህ",
    "ማንኛውም", "ካልሆነ", "የሆኑት", "ቢያንስ", "ይህንንም", "እነደሆነ",
    "እነዚህን", "ይኸው", "የማናቸውም", "በሙሉም", "ይህችው", "በተለይም",
    "አንዱን", "የሚችለውን", "በነዚህ", "ከእነዚህ", "በሌላ", "የዚሁ",
    "ከእነዚሁ", "ለዚሁ", "በሚገባ", "ለእያንዳንዱ", "የአንቀጹ", "ይህም",
    "ስለሆነ", "ወይ", "ማናቸውንም", "ተብሎ", "እነዚህ", "መሆናቸውን",
    "የሆነችን", "ከአስር", "ሳይሆን", "የለውም", "የማይበልጥ", "እንደሆነና",
    "እንዲሆኑ", "በሚችሉ", "ብሎ", "ከሌላ", "የሌላቸውን", "ለሆነ",
    "በሌሎች", "ሁለቱንም", "በታች", "አንደሆነ", "በነሱ", "ይህን",
    "የሌላ", "እንዲህ", "ያላቸው", "በነዚሁ", "በሚል", "የዚህ",
    "ይህንኑ", "በእንደዚህ", "ቁጥር", "ማናቸውም", "ሆነው", "ባሉ",
    "በዚህ", "በስተቀር", "ሲሆንና", "በዚህም", "ምንጊዜም", "እነዚህም",
    "በዚህና", "ያለ", "ስም", "ሲኖር", "ከዚህም", "መሆኑን",
    "በሁኔታው", "የማያንስ", "እነዚህኑ", "ማንም", "ከነዚሁ", "ያላቸውን",
    "እጅግ", "ሲሆኑ", "ለሆኑ", "ሊሆን", "ለማናቸውም", "እንደሚሰሩ",
    "የበኩላቸውን", "የሚጠበቅባቸውን", "ሊረጋገጥ", "አስተዋጽኦ",
];
