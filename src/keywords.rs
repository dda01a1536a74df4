//! Static keyword-group data handed to the widget's lexer.
//!
//! Each group is a space-delimited word blob paired with the widget's
//! keyword-set index. The set numbering belongs to the external lexer
//! component; this module only records which blob goes into which set.

use crate::language::LanguageId;

pub const CS_KEYWORDS: &str = "abstract as base bool break byte case catch char checked \
class const continue decimal default delegate do double else enum event explicit extern \
false finally fixed float for foreach goto if implicit in int interface internal is lock \
long namespace new null object operator out override params private protected public \
readonly record ref required return sbyte sealed short sizeof stackalloc static string \
struct switch this throw true try typeof uint ulong unchecked unsafe ushort using value \
var virtual void volatile when where while yield async await dynamic get global init \
nameof partial set add remove";

pub const CS_TYPES: &str = "Action Boolean Byte Char DateTime DateTimeOffset Decimal \
Dictionary Double EventArgs EventHandler Exception Func Guid IDictionary IEnumerable \
IList Int16 Int32 Int64 IntPtr List Nullable Object SByte Single String StringBuilder \
Task TimeSpan Type UInt16 UInt32 UInt64 UIntPtr";

pub const CPP_KEYWORDS: &str = "alignas alignof and and_eq asm auto bitand bitor bool \
break case catch char char8_t char16_t char32_t class compl concept const consteval \
constexpr constinit const_cast continue co_await co_return co_yield decltype default \
delete do double dynamic_cast else enum explicit export extern false float for friend \
goto if inline int long mutable namespace new noexcept not not_eq nullptr operator or \
or_eq private protected public register reinterpret_cast requires return short signed \
sizeof static static_assert static_cast struct switch template this thread_local throw \
true try typedef typeid typename union unsigned using virtual void volatile wchar_t \
while xor xor_eq";

pub const CPP_TYPES: &str = "int8_t int16_t int32_t int64_t uint8_t uint16_t uint32_t \
uint64_t size_t ssize_t ptrdiff_t intptr_t uintptr_t time_t clock_t va_list FILE string \
wstring string_view vector deque list forward_list map multimap set multiset \
unordered_map unordered_set array bitset queue stack pair tuple optional variant \
shared_ptr unique_ptr weak_ptr";

pub const HTML_TAGS: &str = "a abbr address area article aside audio b base bdi bdo \
blockquote body br button canvas caption cite code col colgroup data datalist dd del \
details dfn dialog div dl dt em embed fieldset figcaption figure footer form h1 h2 h3 \
h4 h5 h6 head header hgroup hr html i iframe img input ins kbd label legend li link \
main map mark menu meta meter nav noscript object ol optgroup option output p param \
picture pre progress q rp rt ruby s samp script section select small source span strong \
style sub summary sup table tbody td template textarea tfoot th thead time title tr \
track u ul var video wbr accept action align alt async autocomplete autofocus autoplay \
charset checked cite class cols colspan content controls coords datetime defer dir \
disabled download draggable enctype for height hidden href hreflang http-equiv id \
integrity lang list loop max maxlength media method min multiple muted name novalidate \
onblur onchange onclick onfocus oninput onkeydown onkeyup onload onmousedown \
onmouseover onmouseup onsubmit open pattern placeholder poster preload readonly rel \
required reversed rows rowspan sandbox scope selected shape size sizes src srcdoc \
srclang srcset start step tabindex target type usemap width wrap";

pub const JS_KEYWORDS: &str = "abstract arguments await boolean break byte case catch \
char class const continue debugger default delete do double else enum export extends \
false final finally float for function goto if implements import in instanceof int \
interface let long native new null of package private protected public return short \
static super switch synchronized this throw throws transient true try typeof var void \
volatile while with yield";

pub const PHP_KEYWORDS: &str = "abstract and array as break callable case catch class \
clone const continue declare default die do echo else elseif empty enddeclare endfor \
endforeach endif endswitch endwhile enum exit extends final finally fn for foreach \
function global goto if implements include include_once instanceof insteadof interface \
isset list match namespace new or print private protected public readonly require \
require_once return static switch throw trait try unset use var while xor yield true \
false null int float string bool void iterable object mixed never";

pub const SQL_KEYWORDS: &str = "absolute action add admin after aggregate alias all \
allocate alter and any are array as asc assertion at authorization before begin between \
binary bit blob boolean both breadth by call cascade cascaded case cast catalog char \
character check class clob close collate collation column commit completion connect \
connection constraint constraints constructor continue corresponding create cross cube \
current current_date current_path current_role current_time current_timestamp \
current_user cursor cycle data date day deallocate dec decimal declare default \
deferrable deferred delete depth deref desc describe descriptor destroy destructor \
deterministic diagnostics dictionary disconnect distinct domain double drop dynamic \
each else end equals escape every except exception exec execute external false fetch \
first float for foreign found from free full function general get global go goto grant \
group grouping having host hour identity if ignore immediate in indicator initialize \
initially inner inout input insert int integer intersect interval into is isolation \
iterate join key language large last lateral leading left less level like limit local \
localtime localtimestamp locator map match merge minute modifies modify module month \
names national natural nchar nclob new next no none not null numeric object of off old \
on only open operation option or order ordinality out outer output pad parameter \
parameters partial path postfix precision prefix preorder prepare preserve primary \
prior privileges procedure public read reads real recursive ref references referencing \
relative restrict result return returns revoke right role rollback rollup routine row \
rows savepoint schema scroll scope search second section select sequence session \
session_user set sets size smallint some space specific specifictype sql sqlexception \
sqlstate sqlwarning start state statement static structure system_user table temporary \
terminate than then time timestamp timezone_hour timezone_minute to trailing \
transaction translation treat trigger true under union unique unknown unnest update \
usage user using value values varchar variable varying view when whenever where with \
without work write year zone";

pub const BATCH_KEYWORDS: &str = "assoc break call cd chcp chdir cls cmd color copy \
date defined del dir do echo else endlocal erase errorlevel exist exit for format \
ftype goto graftabl help if in md mkdir mklink mode more move not nul off on path \
pause popd print prompt pushd rd recover rem ren rename replace rmdir set setlocal \
shift start time title tree type ver verify vol xcopy";

pub const PASCAL_KEYWORDS: &str = "absolute abstract and array as asm assembler \
automated begin case cdecl class const constructor deprecated destructor dispid \
dispinterface div do downto dynamic else end except export exports external far file \
final finalization finally for forward function goto if implementation in inherited \
initialization inline interface is label library message mod near nil not object of on \
or out overload override packed pascal platform private procedure program property \
protected public published raise record register reintroduce repeat resourcestring \
safecall sealed set shl shr static stdcall strict string then threadvar to try type \
unit until uses var virtual while with xor";

pub const POWERSHELL_KEYWORDS: &str = "begin break catch class configuration continue \
data define do dynamicparam else elseif end enum exit filter finally for foreach from \
function hidden if in inlinescript param parallel process return sequence static \
switch throw trap try until using var while workflow";

pub const POWERSHELL_CMDLETS: &str = "add-content add-history add-member add-type \
clear-content clear-history clear-item clear-itemproperty clear-variable \
compare-object convert-path convertfrom-csv convertfrom-json convertfrom-stringdata \
convertto-csv convertto-html convertto-json convertto-xml copy-item copy-itemproperty \
export-alias export-clixml export-csv export-modulemember foreach-object format-custom \
format-list format-table format-wide get-alias get-childitem get-command get-content \
get-credential get-culture get-date get-event get-eventlog get-executionpolicy \
get-help get-history get-host get-item get-itemproperty get-job get-location \
get-member get-module get-process get-random get-service get-variable group-object \
import-alias import-clixml import-csv import-module invoke-command invoke-expression \
invoke-history invoke-item invoke-restmethod invoke-webrequest join-path \
measure-command measure-object move-item move-itemproperty new-alias new-event \
new-item new-itemproperty new-module new-object new-timespan new-variable out-default \
out-file out-host out-null out-printer out-string pop-location push-location read-host \
remove-event remove-item remove-itemproperty remove-job remove-module remove-variable \
rename-item rename-itemproperty resolve-path restart-service select-object \
select-string send-mailmessage set-alias set-content set-date set-executionpolicy \
set-item set-itemproperty set-location set-service set-variable sort-object split-path \
start-job start-process start-service start-sleep start-transcript stop-job \
stop-process stop-service stop-transcript tee-object test-connection test-path \
wait-event wait-job wait-process where-object write-debug write-error write-host \
write-output write-progress write-verbose write-warning";

pub const POWERSHELL_ALIASES: &str = "ac cat cd chdir clc clear clhy cli clp cls clv \
compare copy cp cpi curl del diff dir echo epal epcsv erase etsn fc fl foreach ft fw \
gal gc gci gcm gdr ghy gi gjb gl gm gmo gp gps group gsv gu gv h history icm iex ihy \
ii ipal ipcsv ipmo irm ise iwr kill lp ls man md measure mi mount move mp mv nal ndr \
ni nmo nv ogv oh popd ps pushd pwd r rd rdr ren ri rjb rm rmdir rmo rni rnp rp rv \
rvpa sajb sal saps sasv sbp sc select set shcm si sl sleep sls sort sp spjb spps spsv \
start sv tee type wget where wjb write";

pub const PYTHON_KEYWORDS: &str = "False None True and as assert async await break \
case class continue def del elif else except finally for from global if import in is \
lambda match nonlocal not or pass raise return try while with yield";

pub const PYTHON_BUILTINS: &str = "abs aiter all anext any ascii bin bool breakpoint \
bytearray bytes callable chr classmethod compile complex delattr dict dir divmod \
enumerate eval exec filter float format frozenset getattr globals hasattr hash help \
hex id input int isinstance issubclass iter len list locals map max memoryview min \
next object oct open ord pow print property range repr reversed round set setattr \
slice sorted staticmethod str sum super tuple type vars zip self cls __init__ \
__name__ __main__";

pub const NSIS_FUNCTIONS: &str = "Abort AddBrandingImage AddSize AllowRootDirInstall \
AllowSkipFiles AutoCloseWindow BGFont BGGradient BrandingText BringToFront Call \
CallInstDLL Caption ChangeUI CheckBitmap ClearErrors CompletedText ComponentText \
CopyFiles CRCCheck CreateDirectory CreateFont CreateShortCut Delete DeleteINISec \
DeleteINIStr DeleteRegKey DeleteRegValue DetailPrint DetailsButtonText DirText DirVar \
DirVerify EnableWindow EnumRegKey EnumRegValue Exch Exec ExecShell ExecWait \
ExpandEnvStrings File FileBufSize FileClose FileErrorText FileOpen FileRead \
FileReadByte FileSeek FileWrite FileWriteByte FindClose FindFirst FindNext FindWindow \
FlushINI Function FunctionEnd GetCurInstType GetCurrentAddress GetDlgItem \
GetDLLVersion GetDLLVersionLocal GetErrorLevel GetFileTime GetFileTimeLocal \
GetFullPathName GetFunctionAddress GetInstDirError GetLabelAddress GetTempFileName \
Goto HideWindow Icon IfAbort IfErrors IfFileExists IfRebootFlag IfSilent \
InitPluginsDir InstallButtonText InstallColors InstallDir InstallDirRegKey \
InstProgressFlags InstType IntCmp IntCmpU IntFmt IntOp IsWindow LangString \
LicenseBkColor LicenseData LicenseForceSelection LicenseLangString LicenseText \
LoadLanguageFile LogSet LogText MessageBox MiscButtonText Name Nop OutFile Page \
PageCallbacks PageEx PageExEnd Pop Push Quit ReadEnvStr ReadINIStr ReadRegDWORD \
ReadRegStr Reboot RegDLL Rename RequestExecutionLevel ReserveFile Return RMDir \
SearchPath Section SectionEnd SectionGetFlags SectionGetInstTypes SectionGetSize \
SectionGetText SectionIn SectionSetFlags SectionSetInstTypes SectionSetSize \
SectionSetText SendMessage SetAutoClose SetBrandingImage SetCompress SetCompressor \
SetCompressorDictSize SetCtlColors SetCurInstType SetDatablockOptimize SetDateSave \
SetDetailsPrint SetDetailsView SetErrorLevel SetErrors SetFileAttributes SetFont \
SetOutPath SetOverwrite SetRebootFlag SetRegView SetShellVarContext SetSilent \
ShowInstDetails ShowUninstDetails ShowWindow SilentInstall SilentUnInstall Sleep \
SpaceTexts StrCmp StrCpy StrLen SubCaption Unicode UninstallButtonText \
UninstallCaption UninstallIcon UninstallSubCaption UninstallText UninstPage UnRegDLL \
Var VIAddVersionKey VIFileVersion VIProductVersion WindowIcon WriteINIStr WriteRegBin \
WriteRegDWORD WriteRegExpandStr WriteRegStr WriteUninstaller";

pub const NSIS_VARIABLES: &str = "$0 $1 $2 $3 $4 $5 $6 $7 $8 $9 $R0 $R1 $R2 $R3 $R4 \
$R5 $R6 $R7 $R8 $R9 $ADMINTOOLS $APPDATA $CDBURN_AREA $CMDLINE $COMMONFILES $COOKIES \
$DESKTOP $DOCUMENTS $EXEDIR $EXEFILE $EXEPATH $FAVORITES $FONTS $HISTORY $HWNDPARENT \
$INSTDIR $INTERNET_CACHE $LANGUAGE $LOCALAPPDATA $MUSIC $NETHOOD $OUTDIR $PICTURES \
$PLUGINSDIR $PRINTHOOD $PROFILE $PROGRAMFILES $PROGRAMFILES32 $PROGRAMFILES64 \
$QUICKLAUNCH $RECENT $RESOURCES $RESOURCES_LOCALIZED $SENDTO $SMPROGRAMS $SMSTARTUP \
$STARTMENU $SYSDIR $TEMP $TEMPLATES $VIDEOS $WINDIR";

pub const NSIS_LABELS: &str = ".onGUIEnd .onGUIInit .onInit .onInstFailed \
.onInstSuccess .onMouseOverSection .onRebootFailed .onSelChange .onUserAbort \
.onVerifyInstDir un.onGUIEnd un.onGUIInit un.onInit un.onRebootFailed \
un.onUninstFailed un.onUninstSuccess un.onUserAbort";

pub const NSIS_DEFINES: &str = "!addincludedir !addplugindir !appendfile !cd !define \
!delfile !echo !else !endif !error !execute !getdllversion !if !ifdef !ifmacrodef \
!ifmacrondef !ifndef !include !insertmacro !macro !macroend !packhdr !pragma \
!searchparse !searchreplace !system !tempfile !undef !verbose !warning";

/// The keyword groups for a language, as (keyword-set index, word blob) pairs
/// in the order they are installed. Empty for languages whose lexer takes no
/// keyword lists.
pub fn keyword_groups(language: LanguageId) -> &'static [(u8, &'static str)] {
    match language {
        LanguageId::Cs => &[(0, CS_KEYWORDS), (1, CS_TYPES)],
        LanguageId::Cpp => &[(0, CPP_KEYWORDS), (1, CPP_TYPES)],
        LanguageId::Html => &[(0, HTML_TAGS), (1, JS_KEYWORDS)],
        // Hypertext keyword numbering: set 0 is markup, set 4 is PHP.
        LanguageId::Php => &[(0, HTML_TAGS), (4, PHP_KEYWORDS)],
        LanguageId::Sql => &[(0, SQL_KEYWORDS)],
        LanguageId::Batch => &[(0, BATCH_KEYWORDS)],
        LanguageId::Pascal => &[(0, PASCAL_KEYWORDS)],
        LanguageId::PowerShell => &[
            (0, POWERSHELL_KEYWORDS),
            (1, POWERSHELL_CMDLETS),
            (2, POWERSHELL_ALIASES),
        ],
        LanguageId::Python => &[(0, PYTHON_KEYWORDS), (1, PYTHON_BUILTINS)],
        LanguageId::Nsis => &[
            (0, NSIS_FUNCTIONS),
            (1, NSIS_VARIABLES),
            (2, NSIS_LABELS),
            (3, NSIS_DEFINES),
        ],
        LanguageId::PlainText
        | LanguageId::Xml
        | LanguageId::Ini
        | LanguageId::InnoSetup
        | LanguageId::Yaml => &[],
    }
}
